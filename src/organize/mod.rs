//! Organizer dispatch.
//!
//! Turns the platform names given by the user into naming rules and reports
//! what would be handled. Nothing here touches the filesystem beyond reading.

pub mod dispatcher;

pub use dispatcher::{load_organizers, summarize_support, LoadReport, SupportSummary};
