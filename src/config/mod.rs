//! Configuration module for the media-fetch tools.
//!
//! This module handles:
//! - Loading an optional TOML configuration file
//! - Per-platform extractor presets
//! - Configuration validation

pub mod loader;
pub mod platform;
pub mod validation;

pub use loader::{Config, ExtractorConfig, OutputConfig};
pub use platform::{Platform, FACEBOOK_FORMAT, REEL_FORMAT};
pub use validation::validate_config;
