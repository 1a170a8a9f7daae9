//! Because consistency is great!
//!
pub mod uri;

pub const APPLICATION_JSON: &str = "application/json";

/// Shown in the notes column when a medicine has no notes.
pub const NOTES_FALLBACK: &str = "N/A";
