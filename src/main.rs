//! ROM Library Organizer - CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use rom_library_organizer::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    organize::{load_organizers, summarize_support},
    output::{
        print_error, print_info, print_loaded, print_no_platforms, print_target_directory,
        print_unknown,
    },
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    print_target_directory(&args.target_directory);

    // Load configuration
    let config = Config::load_or_default(args.config.as_deref())?;
    validate_config(&config)?;

    let names = args.platform_names(&config.options.default_platforms);
    if args.platforms.is_empty() && !names.is_empty() {
        print_info(&format!(
            "Using configured platforms: {}",
            names.join(", ")
        ));
    }

    // Resolve organizers
    let report = load_organizers(&names, Arc::new(config.folder_map()));
    for (name, result) in &report.results {
        match result {
            Ok(_) => print_loaded(name),
            Err(_) => print_unknown(name),
        }
    }

    if !report.has_platforms() {
        print_no_platforms();
        return Ok(());
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        let summary = summarize_support(&args.target_directory, &report);
        tracing::debug!(
            "Found {} ROM file(s) in {}",
            summary.total,
            args.target_directory.display()
        );
        for (name, count) in &summary.supported {
            tracing::debug!("{} supports {} of {} file(s)", name, count, summary.total);
        }
    }

    Ok(())
}
