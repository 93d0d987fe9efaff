//! Configuration module for the rom-library-organizer.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, OptionsConfig, CONFIG_FILE_NAME};
pub use validation::{validate_config, validate_default_platforms, validate_folders};
