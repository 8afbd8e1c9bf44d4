//! Media Fetch - download videos and captions from social media posts.
//!
//! The heavy lifting (page parsing, format selection, transfer) is done by
//! an external extractor, `yt-dlp` in production. This crate builds the
//! output template, runs the extractor once, reduces its report to the
//! downloaded video paths plus a caption, and prints the result.
//!
//! # Entry points
//!
//! - `fetch-facebook <POST_URL> <OUTPUT_FILENAME>`: status text
//! - `fetch-instagram <POST_URL> [CUSTOM_NAME]`: one path per line
//! - `fetch-reel [POST_URL]`: one `{"videos": [...], "caption": "..."}` line
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use media_fetch::{fetch::fetch_reel, YtDlp};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let extractor = YtDlp::new("yt-dlp");
//!     let mut stdout = std::io::stdout();
//!     fetch_reel(
//!         &extractor,
//!         Path::new("downloads"),
//!         Some("https://www.facebook.com/reel/123"),
//!         &mut stdout,
//!     )
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use config::{Config, Platform};
pub use error::{Error, Result};
pub use extractor::{ExtractOptions, Extractor, YtDlp};
pub use fetch::{fetch_facebook, fetch_instagram, fetch_reel, FetchRequest};
pub use media::{ExtractionResult, FetchOutcome, MediaEntry};
