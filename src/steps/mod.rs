//! Top-level operations run by the binary.

pub mod patch;

pub use patch::execute;
