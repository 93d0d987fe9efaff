//! Directory scanning for ROM files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::fs::naming::dotted_extension;
use crate::platforms::PlatformRule;

/// Extensions the scanner recognizes as ROM files.
pub const ROM_EXTENSIONS: [&str; 12] = [
    ".nes", ".sfc", ".smc", ".gba", ".gb", ".gbc", ".n64", ".z64", ".v64", ".nds", ".iso", ".bin",
];

/// A ROM file discovered during scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomInfo {
    /// Location of the file.
    pub path: PathBuf,

    /// Lowercased extension, including the leading dot.
    pub extension: String,

    /// Size in bytes.
    pub size: u64,

    /// Final path segment, including the extension.
    pub name: String,
}

impl RomInfo {
    /// Check whether a platform rule handles this file.
    pub fn is_supported_by(&self, rule: &PlatformRule) -> bool {
        rule.supports(&self.path)
    }
}

/// Check whether an extension (with dot, lowercased) is a recognized ROM extension.
pub fn is_rom_extension(extension: &str) -> bool {
    ROM_EXTENSIONS.contains(&extension)
}

/// Walk `root` recursively and yield every ROM file below it.
///
/// A missing root, or one that is not a directory, yields nothing. Entries
/// that cannot be read are skipped. Results come back in traversal order.
pub fn scan_roms(root: impl AsRef<Path>) -> impl Iterator<Item = RomInfo> {
    let root = root.as_ref();
    let walker = if root.is_dir() {
        Some(WalkDir::new(root).follow_links(false).into_iter())
    } else {
        tracing::debug!("Scan root is not a directory: {}", root.display());
        None
    };

    walker
        .into_iter()
        .flatten()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter_map(|entry| rom_info(entry.path()))
}

/// Build a descriptor for a path if it is a regular file with a ROM extension.
fn rom_info(path: &Path) -> Option<RomInfo> {
    let extension = dotted_extension(path)?;
    if !is_rom_extension(&extension) {
        return None;
    }

    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::debug!("Cannot stat {}: {}", path.display(), e);
            return None;
        }
    };
    if !metadata.is_file() {
        return None;
    }

    let name = path.file_name()?.to_string_lossy().into_owned();

    Some(RomInfo {
        path: path.to_path_buf(),
        extension,
        size: metadata.len(),
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platforms::{FolderMap, Layout};
    use std::fs;

    #[test]
    fn test_scan_roms_filters_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let rom = dir.path().join("game.nes");
        fs::write(&rom, b"abc").unwrap();
        let ignored = dir.path().join("notes.txt");
        fs::write(&ignored, "not a rom").unwrap();

        let results: Vec<RomInfo> = scan_roms(dir.path()).collect();
        assert_eq!(results.len(), 1);

        let info = &results[0];
        assert_eq!(info.path, rom);
        assert_eq!(info.extension, ".nes");
        assert_eq!(info.size, 3);
        assert_eq!(info.name, "game.nes");
        assert!(results.iter().all(|r| r.path != ignored));
    }

    #[test]
    fn test_scan_roms_recurses_and_lowercases() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("ZELDA.Z64"), b"12345").unwrap();
        fs::write(dir.path().join("ff7.bin"), b"").unwrap();
        fs::write(dir.path().join("ff7.cue"), b"FILE").unwrap();
        // Directory names with ROM extensions are not files.
        fs::create_dir_all(dir.path().join("folder.iso")).unwrap();

        let mut names: Vec<(String, String, u64)> = scan_roms(dir.path())
            .map(|r| (r.name, r.extension, r.size))
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                ("ZELDA.Z64".to_string(), ".z64".to_string(), 5),
                ("ff7.bin".to_string(), ".bin".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_scan_roms_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert_eq!(scan_roms(&missing).count(), 0);
    }

    #[test]
    fn test_scan_roms_file_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let rom = dir.path().join("game.nes");
        fs::write(&rom, b"abc").unwrap();
        assert_eq!(scan_roms(&rom).count(), 0);
    }

    #[test]
    fn test_scan_roms_can_be_abandoned() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..5 {
            fs::write(dir.path().join(format!("{}.gba", i)), b"x").unwrap();
        }
        let first_two: Vec<RomInfo> = scan_roms(dir.path()).take(2).collect();
        assert_eq!(first_two.len(), 2);
        assert_eq!(scan_roms(dir.path()).count(), 5);
    }

    #[test]
    fn test_rom_info_is_supported_by() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("game.gb"), b"x").unwrap();
        let info = scan_roms(dir.path()).next().unwrap();
        let rule = PlatformRule::new(Layout::Romm, FolderMap::builtin());
        assert!(info.is_supported_by(&rule));
    }
}
