//! ROM Library Organizer - destination paths for ROM files
//!
//! This library computes where a ROM file belongs in the directory layout
//! of an emulator frontend, given metadata that has already been resolved.
//!
//! # Features
//!
//! - Batocera, Knulli, NextUI and ROMM layouts
//! - Filesystem-safe filename sanitization
//! - Recursive ROM discovery
//! - Configurable platform folder names
//!
//! # Example
//!
//! ```
//! use rom_library_organizer::{FileMetadata, FolderMap, PlatformRule};
//!
//! let rule = PlatformRule::from_name("knulli", FolderMap::builtin()).unwrap();
//! let metadata = FileMetadata::new()
//!     .with_platform("Sony Playstation")
//!     .with_name("Final Fantasy VII")
//!     .with_region("USA")
//!     .with_disc(2u32)
//!     .with_extension(".cue");
//!
//! assert_eq!(
//!     rule.build_path(&metadata),
//!     "roms/psx/Final Fantasy VII (USA) (Disc 2).cue"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod organize;
pub mod output;
pub mod platforms;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use fs::{sanitize_filename, scan_roms, RomInfo};
pub use organize::{load_organizers, LoadReport};
pub use platforms::{DiscNumber, FileMetadata, FolderMap, Layout, PlatformRule};
