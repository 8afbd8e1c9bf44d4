//! External media extractor.
//!
//! The extractor locates media behind a post URL, downloads it according to
//! an output template and reports what it wrote. The production
//! implementation drives the `yt-dlp` executable.

pub mod types;
pub mod ytdlp;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::Platform;
use crate::error::Result;
use crate::fs::OutputTarget;
use crate::media::ExtractionResult;

pub use ytdlp::YtDlp;

/// Settings for one extractor run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Output path template, placeholders included.
    pub output_template: PathBuf,

    /// Format selector, `None` for the extractor default.
    pub format: Option<String>,

    /// Fetch a whole playlist when the URL points into one.
    pub allow_playlist: bool,

    /// Skip failed sub-entries instead of aborting the run.
    pub ignore_errors: bool,

    /// Suppress the extractor's progress output.
    pub quiet: bool,

    /// Suppress extractor warnings.
    pub no_warnings: bool,
}

impl ExtractOptions {
    /// Options for a platform preset writing to `target`.
    pub fn for_platform(platform: Platform, target: &OutputTarget) -> Self {
        Self {
            output_template: target.template_path(),
            format: platform.format().map(str::to_string),
            allow_playlist: platform.allow_playlist(),
            ignore_errors: platform.ignore_errors(),
            quiet: platform.quiet(),
            no_warnings: platform.no_warnings(),
        }
    }
}

/// Capability to extract and download media from a URL.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract metadata for `url` and download its media.
    ///
    /// Returns `Ok(None)` when failures were tolerated and nothing at all
    /// could be extracted.
    async fn extract(&self, url: &str, options: &ExtractOptions) -> Result<Option<ExtractionResult>>;
}
