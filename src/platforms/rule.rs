//! Destination path rules.

use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::fs::naming::{dotted_extension, sanitize_component, sanitize_filename};
use crate::platforms::folders::FolderMap;
use crate::platforms::layout::Layout;
use crate::platforms::metadata::FileMetadata;

/// Region used by NextUI when metadata has none.
const UNKNOWN_REGION: &str = "Unknown Region";

/// A naming rule for one layout.
///
/// Maps file metadata to a forward-slash separated path relative to the
/// library root. Path building never fails: missing fields fall back to the
/// layout's defaults. Uniqueness of the produced paths is up to the caller.
#[derive(Debug, Clone)]
pub struct PlatformRule {
    layout: Layout,
    folders: Arc<FolderMap>,
}

impl PlatformRule {
    pub fn new(layout: Layout, folders: impl Into<Arc<FolderMap>>) -> Self {
        Self {
            layout,
            folders: folders.into(),
        }
    }

    /// Resolve a rule from its registry name.
    pub fn from_name(name: &str, folders: impl Into<Arc<FolderMap>>) -> Result<Self> {
        let layout: Layout = name
            .parse()
            .map_err(|_| Error::UnknownPlatform(name.to_string()))?;
        Ok(Self::new(layout, folders))
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn name(&self) -> &'static str {
        self.layout.name()
    }

    /// Check whether a file is handled, based on its extension only.
    pub fn supports(&self, file: impl AsRef<Path>) -> bool {
        dotted_extension(file.as_ref())
            .map(|ext| self.supports_extension(&ext))
            .unwrap_or(false)
    }

    /// Check a dotted extension such as `.NES` against this layout's set.
    pub fn supports_extension(&self, extension: &str) -> bool {
        let extension = extension.to_lowercase();
        self.layout.extensions().contains(&extension.as_str())
    }

    /// Build the destination path for a file.
    pub fn build_path(&self, metadata: &FileMetadata) -> String {
        let path = if metadata.is_bios && self.layout.has_bios_folder() {
            self.bios_path(metadata)
        } else {
            self.game_path(metadata)
        };
        tracing::debug!("{} -> {}", self.layout, path);
        path
    }

    /// `bios/<name><ext>`.
    fn bios_path(&self, metadata: &FileMetadata) -> String {
        format!(
            "bios/{}{}",
            sanitize_component(metadata.name.as_deref(), self.layout.default_name()),
            metadata.extension_or_empty()
        )
    }

    fn game_path(&self, metadata: &FileMetadata) -> String {
        match self.layout {
            Layout::Batocera => self.system_path(metadata, None),
            Layout::Knulli => self.system_path(metadata, Some("roms")),
            Layout::NextUi => self.region_path(metadata),
            Layout::Romm => self.game_folder_path(metadata),
        }
    }

    /// `[<parent>/]<system>/<name> (<region>) (Disc N)<ext>`.
    fn system_path(&self, metadata: &FileMetadata, parent: Option<&str>) -> String {
        let name = sanitize_component(metadata.name.as_deref(), self.layout.default_name());
        let extension = metadata.extension_or_empty();

        let platform = metadata
            .platform
            .as_deref()
            .unwrap_or(self.layout.default_platform());
        let folder = self.folders.folder_for(platform);

        let mut base_name = name;
        if let Some(region) = metadata.region_suffix() {
            base_name.push_str(&format!(" ({})", region));
        }
        if let Some(disc) = metadata.effective_disc() {
            base_name.push_str(&format!(" (Disc {})", disc));
        }
        let base_name = sanitize_filename(&base_name);

        match parent {
            Some(parent) => format!("{}/{}/{}{}", parent, folder, base_name, extension),
            None => format!("{}/{}{}", folder, base_name, extension),
        }
    }

    /// `<platform>/<region>/<name> - Disc N<ext>`.
    fn region_path(&self, metadata: &FileMetadata) -> String {
        let platform =
            sanitize_component(metadata.platform.as_deref(), self.layout.default_platform());
        let region = sanitize_component(metadata.region.as_deref(), UNKNOWN_REGION);
        let mut base_name =
            sanitize_component(metadata.name.as_deref(), self.layout.default_name());

        if let Some(disc) = metadata.effective_disc() {
            base_name.push_str(&format!(" - Disc {}", disc));
        }
        let base_name = sanitize_filename(&base_name);

        format!(
            "{}/{}/{}{}",
            platform,
            region,
            base_name,
            metadata.extension_or_empty()
        )
    }

    /// `<platform>/<game>/<game><ext>`, where the game folder and file share a name.
    fn game_folder_path(&self, metadata: &FileMetadata) -> String {
        let platform =
            sanitize_component(metadata.platform.as_deref(), self.layout.default_platform());
        let name = sanitize_component(metadata.name.as_deref(), self.layout.default_name());

        let base_name = match metadata.region_suffix() {
            Some(region) => sanitize_filename(&format!("{} ({})", name, region)),
            None => name,
        };

        format!(
            "{}/{}/{}{}",
            platform,
            base_name,
            base_name,
            metadata.extension_or_empty()
        )
    }
}
