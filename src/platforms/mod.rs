//! Platform naming rules.
//!
//! Provides:
//! - File metadata input
//! - The platform folder map
//! - Layout registry and the destination path rules

pub mod folders;
pub mod layout;
pub mod metadata;
pub mod rule;

pub use folders::FolderMap;
pub use layout::Layout;
pub use metadata::{DiscNumber, FileMetadata};
pub use rule::PlatformRule;
