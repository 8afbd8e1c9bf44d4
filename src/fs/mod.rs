//! Filesystem module.
//!
//! Provides:
//! - Output directory management
//! - Output name template generation

pub mod naming;
pub mod paths;

pub use naming::{default_template, AUTONUMBER, EXT, ID};
pub use paths::{ensure_dir, OutputTarget};
