//! Command-line argument definitions using clap.

use clap::error::ErrorKind;
use clap::{Args, Parser};
use std::path::PathBuf;

use crate::config::{validate_config, Config};
use crate::error::Result;
use crate::output::print_usage;

pub const FACEBOOK_USAGE: &str = "fetch-facebook <POST_URL> <OUTPUT_FILENAME>";
pub const INSTAGRAM_USAGE: &str = "fetch-instagram <POST_URL> [CUSTOM_NAME]";
pub const REEL_USAGE: &str = "fetch-reel [POST_URL]";

/// Download a Facebook post video under a chosen file name.
#[derive(Parser, Debug)]
#[command(name = "fetch-facebook", version)]
pub struct FacebookArgs {
    /// Facebook post URL.
    pub post_url: String,

    /// File name to save the video as, inside the downloads directory.
    pub output_filename: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Download the videos of an Instagram post or reel and print their paths.
#[derive(Parser, Debug)]
#[command(name = "fetch-instagram", version)]
pub struct InstagramArgs {
    /// Instagram post or reel URL.
    pub post_url: String,

    /// File name to save the video as, instead of `<post id>_<n>.<ext>`.
    pub custom_name: Option<String>,

    /// Further positional arguments are accepted and ignored.
    #[arg(hide = true, num_args = 0..)]
    pub ignored: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Download a reel and print a JSON summary of the result.
#[derive(Parser, Debug)]
#[command(name = "fetch-reel", version)]
pub struct ReelArgs {
    /// Reel URL. Without one, an empty result is printed.
    pub post_url: Option<String>,

    /// Further positional arguments are accepted and ignored.
    #[arg(hide = true, num_args = 0..)]
    pub ignored: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options shared by every entry point.
#[derive(Args, Debug, Default)]
pub struct CommonArgs {
    /// Directory downloads are written to (default: `downloads/` next to the executable).
    #[arg(long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Path to the yt-dlp executable.
    #[arg(long = "yt-dlp")]
    pub yt_dlp: Option<PathBuf>,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl CommonArgs {
    /// Load the configuration file (if any), apply CLI overrides and validate.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_or_default(self.config.as_deref())?;
        self.merge_into_config(&mut config);
        validate_config(&config)?;
        Ok(config)
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.output_dir {
            config.output.download_directory = Some(dir.clone());
        }

        if let Some(binary) = &self.yt_dlp {
            config.extractor.binary = binary.clone();
        }
    }
}

/// Parse arguments, printing `usage` on failure.
///
/// Help and version requests exit through clap as usual. Any other parse
/// error yields `None` after the usage line has been printed.
pub fn parse_args<T, I, S>(args: I, usage: &str) -> Option<T>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(parsed) => Some(parsed),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            tracing::debug!("Argument error: {}", e);
            print_usage(usage);
            None
        }
    }
}
