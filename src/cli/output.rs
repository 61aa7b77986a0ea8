//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr, followed by its causes
pub fn error(err: &(dyn std::error::Error + 'static)) {
    eprintln!("{}: {}", "error".red().bold(), err);
    let mut cause = err.source();
    while let Some(e) = cause {
        eprintln!("  {}: {}", "caused by".yellow(), e);
        cause = e.source();
    }
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}
