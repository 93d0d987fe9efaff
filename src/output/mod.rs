//! Output module for console output.

pub mod console;

pub use self::console::{
    print_error, print_info, print_loaded, print_no_platforms, print_target_directory,
    print_unknown,
};
