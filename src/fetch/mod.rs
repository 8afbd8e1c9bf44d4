//! Entry point flows, one per platform.
//!
//! Each flow prepares the output target, runs the extractor once and
//! reports the outcome in its own format.

pub mod facebook;
pub mod instagram;
pub mod reel;

pub use facebook::fetch_facebook;
pub use instagram::fetch_instagram;
pub use reel::fetch_reel;

/// A fetch requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Post URL to fetch.
    pub source_url: String,

    /// Caller-chosen output file name.
    pub output_name_hint: Option<String>,
}

impl FetchRequest {
    pub fn new(source_url: impl Into<String>, output_name_hint: Option<String>) -> Self {
        Self {
            source_url: source_url.into(),
            output_name_hint,
        }
    }
}
