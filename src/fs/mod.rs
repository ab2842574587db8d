//! Whole-file reads and writes, plus diagnostics for files that are missing.
//!
//! Every file the tool touches is read once and written once, with no
//! locking and no backup.

pub mod missing;
pub mod write;

pub use missing::{MissingFileContext, describe_missing};
pub use write::{overwrite, read_text};
