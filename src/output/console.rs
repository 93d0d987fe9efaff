//! Console output utilities.

use std::path::Path;

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the directory being organized.
pub fn print_target_directory(target: &Path) {
    println!("Target directory: {}", style(target.display()).bold());
}

/// Report a platform organizer that was resolved.
pub fn print_loaded(name: &str) {
    println!("Loaded platform organizer: {}", style(name).green());
}

/// Report a platform name that matched nothing.
pub fn print_unknown(name: &str) {
    println!("Unknown platform: {}", style(name).yellow());
}

/// Report that no organizer could be loaded.
pub fn print_no_platforms() {
    println!("No platforms selected.");
}
