// Rust guideline compliant 2026-10-16

//! Terminal capability detection.

use std::env;
use std::io::IsTerminal;

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    color_allowed(env::var_os("NO_COLOR").is_some(), std::io::stdout().is_terminal())
}

fn color_allowed(no_color: bool, is_tty: bool) -> bool {
    !no_color && is_tty
}
