//! Command-line parsing and process setup shared by the entry points.

pub mod args;

pub use args::{
    parse_args, CommonArgs, FacebookArgs, InstagramArgs, ReelArgs, FACEBOOK_USAGE,
    INSTAGRAM_USAGE, REEL_USAGE,
};

use tracing_subscriber::{fmt, EnvFilter};

/// Set up logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects `debug` and the
/// default is `info`.
pub fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
