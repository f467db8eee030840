//! Terminal output helpers for CLI handlers.

use std::fmt::Display;

use owo_colors::OwoColorize;

/// Print a section title.
pub fn section(title: &str) {
    println!();
    println!("{}", title.bold());
}

/// Print an aligned `label value` line.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<10} {value}", label.dimmed());
}

/// Print a success line.
pub fn success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    eprintln!("  {} {}", "×".red(), message);
}
