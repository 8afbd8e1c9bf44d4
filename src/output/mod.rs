//! Output module for console messages and result emission.
//!
//! Provides:
//! - Colored console output
//! - Progress spinner
//! - Result emitters (JSON line, path per line)

pub mod console;
pub mod emit;
pub mod json;
pub mod progress;

pub use console::{print_error, print_usage, write_status};
pub use emit::{write_json_line, write_path_lines};
pub use progress::create_spinner;
