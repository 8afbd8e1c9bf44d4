//! Progress spinner utilities.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Create a spinner for long-running operations.
///
/// Draws on stderr so stdout stays reserved for results; hidden when
/// stderr is not a terminal.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}
