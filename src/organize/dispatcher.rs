//! Resolution of requested platform names into rules.

use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::fs::scan_roms;
use crate::platforms::{FolderMap, PlatformRule};

/// Outcome of resolving a list of platform names.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Each requested name with its rule, or the error that stopped it, in
    /// request order.
    pub results: Vec<(String, Result<PlatformRule>)>,
}

impl LoadReport {
    /// Whether at least one rule was resolved.
    pub fn has_platforms(&self) -> bool {
        self.rules().next().is_some()
    }

    /// The resolved rules, in request order.
    pub fn rules(&self) -> impl Iterator<Item = &PlatformRule> {
        self.results.iter().filter_map(|(_, r)| r.as_ref().ok())
    }

    /// Names that matched no registered layout.
    pub fn unknown(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|(_, r)| r.is_err())
            .map(|(name, _)| name.as_str())
    }
}

/// Resolve each name to a rule, sharing one folder map between them.
///
/// Unknown names are recorded and never stop the remaining names from
/// being resolved.
pub fn load_organizers<S: AsRef<str>>(names: &[S], folders: Arc<FolderMap>) -> LoadReport {
    let results = names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let rule = PlatformRule::from_name(name, Arc::clone(&folders));
            match &rule {
                Ok(rule) => tracing::debug!("Resolved {} to layout {}", name, rule.layout()),
                Err(e) => tracing::debug!("{}", e),
            }
            (name.to_string(), rule)
        })
        .collect();

    LoadReport { results }
}

/// Per-rule count of scanned ROM files it supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportSummary {
    /// ROM files found under the scanned directory.
    pub total: usize,

    /// Supported file count for each loaded rule, in load order.
    pub supported: Vec<(&'static str, usize)>,
}

/// Scan `target` and count how many discovered files each rule supports.
///
/// Read-only: nothing is moved or created.
pub fn summarize_support(target: &Path, report: &LoadReport) -> SupportSummary {
    let mut summary = SupportSummary {
        total: 0,
        supported: report.rules().map(|rule| (rule.name(), 0)).collect(),
    };

    for rom in scan_roms(target) {
        summary.total += 1;
        for (rule, (_, count)) in report.rules().zip(summary.supported.iter_mut()) {
            if rom.is_supported_by(rule) {
                *count += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::platforms::Layout;
    use std::fs;

    fn folders() -> Arc<FolderMap> {
        Arc::new(FolderMap::builtin())
    }

    #[test]
    fn test_load_organizers_keeps_order_and_reports_unknown() {
        let report = load_organizers(&["romm", "onion", "Batocera", "retroarch"], folders());

        let requested: Vec<(&str, bool)> = report
            .results
            .iter()
            .map(|(n, r)| (n.as_str(), r.is_ok()))
            .collect();
        assert_eq!(
            requested,
            vec![
                ("romm", true),
                ("onion", false),
                ("Batocera", true),
                ("retroarch", false)
            ]
        );
        let layouts: Vec<Layout> = report.rules().map(PlatformRule::layout).collect();
        assert_eq!(layouts, vec![Layout::Romm, Layout::Batocera]);
        assert_eq!(report.unknown().collect::<Vec<_>>(), vec!["onion", "retroarch"]);
        assert!(report.has_platforms());
    }

    #[test]
    fn test_load_organizers_empty() {
        let report = load_organizers::<&str>(&[], folders());
        assert!(!report.has_platforms());
        assert!(report.results.is_empty());

        let report = load_organizers(&["nope"], folders());
        assert!(!report.has_platforms());
        assert!(matches!(
            &report.results[0],
            (name, Err(Error::UnknownPlatform(_))) if name == "nope"
        ));
    }

    #[test]
    fn test_loaded_rules_share_folder_overrides() {
        let folders = Arc::new(FolderMap::with_overrides([("Sega Genesis", "genesis")]));
        let report = load_organizers(&["batocera", "knulli"], folders);
        let meta = crate::platforms::FileMetadata::new()
            .with_platform("sega genesis")
            .with_name("Sonic")
            .with_extension(".bin");

        let paths: Vec<String> = report.rules().map(|r| r.build_path(&meta)).collect();
        assert_eq!(paths, vec!["genesis/Sonic.bin", "roms/genesis/Sonic.bin"]);
    }

    #[test]
    fn test_summarize_support() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.nes"), b"1").unwrap();
        fs::write(dir.path().join("b.iso"), b"22").unwrap();
        fs::write(dir.path().join("b.cue"), b"FILE").unwrap();
        fs::write(dir.path().join("c.txt"), b"x").unwrap();

        let report = load_organizers(&["romm", "nextui"], folders());
        let summary = summarize_support(dir.path(), &report);

        // The scanner does not pick up cue sheets.
        assert_eq!(summary.total, 2);
        assert_eq!(summary.supported, vec![("romm", 2), ("nextui", 2)]);
    }

    #[test]
    fn test_summarize_support_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let report = load_organizers(&["knulli"], folders());
        let summary = summarize_support(&dir.path().join("missing"), &report);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.supported, vec![("knulli", 0)]);
    }
}
