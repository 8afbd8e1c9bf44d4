//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory downloads land in when nothing else is configured.
pub const DEFAULT_DOWNLOADS_DIR: &str = "downloads";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extractor: ExtractorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// External extractor settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    /// Path or name of the yt-dlp executable.
    #[serde(default = "default_binary")]
    pub binary: PathBuf,

    /// Extra arguments appended to every extractor invocation.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

/// Output location settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Directory downloaded files are written to.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            extra_args: Vec::new(),
        }
    }
}

fn default_binary() -> PathBuf {
    if cfg!(target_os = "windows") {
        PathBuf::from("yt-dlp.exe")
    } else {
        PathBuf::from("yt-dlp")
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file when one was given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Get the effective download directory.
    ///
    /// Without an explicit setting this is `downloads/` next to the running
    /// executable, falling back to the working directory.
    pub fn download_directory(&self) -> PathBuf {
        if let Some(dir) = &self.output.download_directory {
            return dir.clone();
        }

        let base = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(DEFAULT_DOWNLOADS_DIR)
    }
}
