//! Output directory management.

use std::path::{Path, PathBuf};

use crate::config::Platform;
use crate::error::{Error, Result};
use crate::fs::naming::default_template;

/// Where an extractor run writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Directory the files land in.
    pub directory: PathBuf,

    /// File name template, possibly with extractor placeholders.
    pub name_template: String,
}

impl OutputTarget {
    /// Build the target for a request and create its directory.
    ///
    /// A caller-supplied name is used verbatim; otherwise the platform
    /// default template applies.
    pub fn prepare(
        directory: &Path,
        platform: Platform,
        url: &str,
        name_hint: Option<&str>,
    ) -> Result<Self> {
        let name_template = match name_hint {
            Some(name) => name.to_string(),
            None => default_template(platform, url).ok_or_else(|| {
                Error::Usage(format!("An output file name is required for {}", platform))
            })?,
        };

        ensure_dir(directory)?;

        Ok(Self {
            directory: directory.to_path_buf(),
            name_template,
        })
    }

    /// Full output template handed to the extractor.
    pub fn template_path(&self) -> PathBuf {
        self.directory.join(&self.name_template)
    }
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    tracing::debug!("Ensuring directory {}", path.display());
    std::fs::create_dir_all(path)?;
    Ok(())
}
