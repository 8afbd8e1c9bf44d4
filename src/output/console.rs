//! Console output utilities.

use std::io::{self, Write};

use console::style;

/// Write a plain status line.
///
/// Stdout lines are read by other processes, so they carry no label or
/// colour. Styling is kept for stderr.
pub fn write_status(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message)
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a usage line.
pub fn print_usage(usage: &str) {
    eprintln!("Usage: {}", usage);
}
