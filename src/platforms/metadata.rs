//! File metadata consumed by the naming rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// A disc number, given either as an integer or as free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiscNumber {
    Number(i64),
    Text(String),
}

impl DiscNumber {
    /// Whether this disc number should appear in a filename.
    ///
    /// `0` and the empty string count as "no disc". This means a real disc
    /// zero is never rendered.
    pub fn is_set(&self) -> bool {
        match self {
            DiscNumber::Number(n) => *n != 0,
            DiscNumber::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for DiscNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscNumber::Number(n) => write!(f, "{}", n),
            DiscNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for DiscNumber {
    fn from(n: i64) -> Self {
        DiscNumber::Number(n)
    }
}

impl From<u32> for DiscNumber {
    fn from(n: u32) -> Self {
        DiscNumber::Number(i64::from(n))
    }
}

impl From<&str> for DiscNumber {
    fn from(s: &str) -> Self {
        DiscNumber::Text(s.to_string())
    }
}

impl From<String> for DiscNumber {
    fn from(s: String) -> Self {
        DiscNumber::Text(s)
    }
}

/// Already-resolved metadata for one file.
///
/// Every field is optional; rules substitute their own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Game or firmware name.
    #[serde(default)]
    pub name: Option<String>,

    /// Human-readable platform name, e.g. "Sony Playstation".
    #[serde(default)]
    pub platform: Option<String>,

    /// Release region, e.g. "USA".
    #[serde(default)]
    pub region: Option<String>,

    /// Disc number. Wins over `disc_number` when set.
    #[serde(default)]
    pub disc: Option<DiscNumber>,

    /// Alternative key for the disc number.
    #[serde(default)]
    pub disc_number: Option<DiscNumber>,

    /// File extension including the leading dot.
    #[serde(default)]
    pub extension: Option<String>,

    /// Whether the file is platform firmware.
    #[serde(default)]
    pub is_bios: bool,
}

impl FileMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse metadata from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_disc(mut self, disc: impl Into<DiscNumber>) -> Self {
        self.disc = Some(disc.into());
        self
    }

    pub fn with_disc_number(mut self, disc: impl Into<DiscNumber>) -> Self {
        self.disc_number = Some(disc.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn bios(mut self, is_bios: bool) -> Self {
        self.is_bios = is_bios;
        self
    }

    /// The disc number to render, if any.
    ///
    /// Takes the first of `disc` and `disc_number` that is set, so an unset
    /// `disc` (including `0`) falls through to `disc_number`.
    pub fn effective_disc(&self) -> Option<&DiscNumber> {
        self.disc
            .as_ref()
            .filter(|d| d.is_set())
            .or_else(|| self.disc_number.as_ref().filter(|d| d.is_set()))
    }

    /// The region to append as a suffix, if present and non-empty.
    pub fn region_suffix(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.is_empty())
    }

    /// The extension to append, or an empty string.
    pub fn extension_or_empty(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }
}
