//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// ROM library organizer CLI.
#[derive(Parser, Debug)]
#[command(
    name = "rom-library-organizer",
    version,
    about = "Organize a ROM library for selected platforms",
    long_about = "Compute frontend-specific destination paths for ROM files.\n\n\
                  Supported platforms: batocera, knulli, nextui, romm."
)]
pub struct Args {
    /// Directory containing the ROM files to organize.
    pub target_directory: PathBuf,

    /// Names of the platforms to process.
    pub platforms: Vec<String>,

    /// Path to configuration file.
    /// Defaults to config.toml in the user configuration directory, if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Platform names to load: the command line wins, then the configured defaults.
    pub fn platform_names(&self, configured: &[String]) -> Vec<String> {
        if self.platforms.is_empty() {
            configured.to_vec()
        } else {
            self.platforms.clone()
        }
    }
}
