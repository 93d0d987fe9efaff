//! Filesystem module.
//!
//! Provides:
//! - Filename sanitization
//! - ROM discovery under a directory tree

pub mod naming;
pub mod scanner;

pub use naming::{dotted_extension, is_disallowed_char, sanitize_component, sanitize_filename};
pub use scanner::{is_rom_extension, scan_roms, RomInfo, ROM_EXTENSIONS};
