//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use crate::platforms::Layout;
use regex::Regex;

/// Folder tokens are short lowercase directory names.
const FOLDER_TOKEN_PATTERN: &str = r"^[a-z0-9_-]+$";

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_folders(config.folders.iter())?;
    validate_default_platforms(&config.options.default_platforms)?;

    Ok(())
}

/// Validate folder overrides.
pub fn validate_folders<'a, I>(folders: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let token_pattern =
        Regex::new(FOLDER_TOKEN_PATTERN).map_err(|e| Error::Config(e.to_string()))?;

    for (platform, folder) in folders {
        if platform.trim().is_empty() {
            return Err(Error::ConfigValidation {
                field: "folders".to_string(),
                message: "Platform name cannot be empty".to_string(),
            });
        }

        if !token_pattern.is_match(folder) {
            return Err(Error::ConfigValidation {
                field: "folders".to_string(),
                message: format!(
                    "Folder '{}' for platform '{}' is invalid. Only lowercase letters, digits, hyphens, and underscores allowed.",
                    folder, platform
                ),
            });
        }
    }

    Ok(())
}

/// Validate that every default platform names a registered layout.
pub fn validate_default_platforms<S: AsRef<str>, I: IntoIterator<Item = S>>(
    names: I,
) -> Result<()> {
    for name in names {
        let name = name.as_ref();
        if name.parse::<Layout>().is_err() {
            return Err(Error::ConfigValidation {
                field: "default_platforms".to_string(),
                message: format!(
                    "Unknown platform '{}'. Expected one of: {}",
                    name,
                    Layout::ALL
                        .iter()
                        .map(Layout::name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_folder(platform: &str, folder: &str) -> Config {
        let mut config = Config::default();
        config.folders.insert(platform.into(), folder.into());
        config
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_valid_folders() {
        assert!(validate_config(&config_with_folder("Sega Genesis", "megadrive")).is_ok());
        assert!(validate_config(&config_with_folder("Neo Geo Pocket", "ngp_c-2")).is_ok());
    }

    #[test]
    fn test_invalid_folders() {
        assert!(validate_config(&config_with_folder("Sega Genesis", "")).is_err());
        assert!(validate_config(&config_with_folder("Sega Genesis", "Mega Drive")).is_err());
        assert!(validate_config(&config_with_folder("Sega Genesis", "../etc")).is_err());
        assert!(validate_config(&config_with_folder("  ", "md")).is_err());
    }

    #[test]
    fn test_default_platforms() {
        assert!(validate_default_platforms(&["batocera", "Romm"]).is_ok());

        match validate_default_platforms(&["batocera", "onion"]) {
            Err(Error::ConfigValidation { field, message }) => {
                assert_eq!(field, "default_platforms");
                assert!(message.contains("onion"));
                assert!(message.contains("nextui"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
