//! Supported library layouts.

use std::fmt;
use std::str::FromStr;

use crate::fs::scanner::ROM_EXTENSIONS;

/// ROM extensions plus cue sheets.
const ROM_AND_CUE_EXTENSIONS: &[&str] = &[
    ".nes", ".sfc", ".smc", ".gba", ".gb", ".gbc", ".n64", ".z64", ".v64", ".nds", ".iso", ".bin",
    ".cue",
];

/// A frontend's directory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `<system>/<game>` with a top-level `bios` folder.
    Batocera,
    /// Same as Batocera, with games under `roms/<system>`.
    Knulli,
    /// `<platform>/<region>/<game> - Disc N`.
    NextUi,
    /// `<platform>/<game>/<game>`.
    Romm,
}

impl Layout {
    /// Every registered layout, in lookup order.
    pub const ALL: [Layout; 4] = [
        Layout::Batocera,
        Layout::Knulli,
        Layout::NextUi,
        Layout::Romm,
    ];

    /// Registry name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Batocera => "batocera",
            Layout::Knulli => "knulli",
            Layout::NextUi => "nextui",
            Layout::Romm => "romm",
        }
    }

    /// File extensions this layout accepts, lowercased with a leading dot.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Layout::Batocera | Layout::Knulli | Layout::NextUi => ROM_AND_CUE_EXTENSIONS,
            Layout::Romm => &ROM_EXTENSIONS,
        }
    }

    /// Whether BIOS files are routed to a dedicated `bios` folder.
    pub fn has_bios_folder(&self) -> bool {
        matches!(self, Layout::Batocera | Layout::Knulli)
    }

    /// Name used when metadata has none.
    pub fn default_name(&self) -> &'static str {
        match self {
            Layout::Batocera | Layout::Knulli => "Unknown",
            Layout::NextUi | Layout::Romm => "Unknown Game",
        }
    }

    /// Platform used when metadata has none.
    pub fn default_platform(&self) -> &'static str {
        match self {
            Layout::Batocera | Layout::Knulli => "unknown",
            Layout::NextUi | Layout::Romm => "Unknown Platform",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Layout::ALL
            .into_iter()
            .find(|layout| layout.name() == wanted)
            .ok_or_else(|| format!("Unknown platform: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trips_names() {
        for layout in Layout::ALL {
            assert_eq!(layout.name().parse::<Layout>().unwrap(), layout);
            assert_eq!(layout.to_string(), layout.name());
        }
    }

    #[test]
    fn test_from_str_ignores_case_and_padding() {
        assert_eq!("  Batocera ".parse::<Layout>().unwrap(), Layout::Batocera);
        assert_eq!("NEXTUI".parse::<Layout>().unwrap(), Layout::NextUi);
    }

    #[test]
    fn test_from_str_unknown() {
        assert!("retroarch".parse::<Layout>().is_err());
        assert!("".parse::<Layout>().is_err());
    }

    #[test]
    fn test_romm_has_no_cue() {
        assert!(!Layout::Romm.extensions().contains(&".cue"));
        assert!(Layout::Knulli.extensions().contains(&".cue"));
        assert_eq!(Layout::Batocera.extensions().len(), 13);
    }
}
