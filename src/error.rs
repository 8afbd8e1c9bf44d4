//! Error types for the media-fetch tools.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Invocation errors
    #[error("{0}")]
    Usage(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Extractor errors
    #[error("{0}")]
    Download(String),

    #[error("Extractor not found: '{0}'. Please install yt-dlp and ensure it's in your PATH.")]
    ExtractorNotFound(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes shared by all entry points.
pub mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const FAILURE: u8 = 1;
}
