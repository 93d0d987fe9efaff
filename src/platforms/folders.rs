//! Platform name to folder token mapping.

use std::collections::HashMap;

use crate::fs::naming::{is_usable_segment, sanitize_filename};

/// Folder token used when a platform name leaves nothing usable.
pub const UNKNOWN_FOLDER: &str = "unknown";

/// Built-in folder tokens, keyed by lowercased platform name.
const BUILTIN_FOLDERS: [(&str, &str); 5] = [
    ("nintendo 64", "n64"),
    ("sony playstation", "psx"),
    ("playstation", "psx"),
    ("snes", "snes"),
    ("super nintendo", "snes"),
];

/// Read-only map from human-readable platform names to short folder tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderMap {
    entries: HashMap<String, String>,
}

impl FolderMap {
    /// Create a map holding only the built-in entries.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_FOLDERS
                .iter()
                .map(|(name, folder)| (name.to_string(), folder.to_string()))
                .collect(),
        }
    }

    /// Create a map from the built-in entries plus `overrides`.
    ///
    /// Override keys are lowercased; an override replaces a built-in entry
    /// with the same key.
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = Self::builtin();
        for (name, folder) in overrides {
            map.entries
                .insert(name.as_ref().to_lowercase(), folder.into());
        }
        map
    }

    /// Look up the mapped folder token for a platform, ignoring case.
    pub fn get(&self, platform: &str) -> Option<&str> {
        self.entries
            .get(&platform.to_lowercase())
            .map(String::as_str)
    }

    /// Resolve the folder for a platform.
    ///
    /// Unmapped platforms fall back to the sanitized, lowercased name with
    /// spaces removed ("Game Boy" becomes "gameboy").
    pub fn folder_for(&self, platform: &str) -> String {
        if let Some(folder) = self.get(platform) {
            return folder.to_string();
        }

        let derived = sanitize_filename(platform).to_lowercase().replace(' ', "");
        if is_usable_segment(&derived) {
            derived
        } else {
            UNKNOWN_FOLDER.to_string()
        }
    }
}

impl Default for FolderMap {
    fn default() -> Self {
        Self::builtin()
    }
}
