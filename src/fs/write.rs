use crate::error::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Reads a file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    log::debug!("Reading {}", path.display());
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content)
}

/// Replaces the contents of `path` with `contents`.
///
/// In dry-run mode the write is only logged.
pub fn overwrite(path: &Path, contents: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        log::info!("Would write: {}", path.display());
        return Ok(());
    }

    log::debug!("Writing {} bytes to {}", contents.len(), path.display());
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
