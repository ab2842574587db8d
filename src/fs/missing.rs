//! Context gathered when a mandatory file cannot be found.
//!
//! The tool usually runs inside a CI job right after `npx cap sync ios`, where
//! the most common failure is running from the wrong directory. The context
//! records where we were, where we looked, and what was actually there.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound on directory entries included in the diagnostic.
const MAX_LISTED: usize = 20;

/// Where the tool was looking for a missing file.
#[derive(Debug, Clone)]
pub struct MissingFileContext {
    /// Working directory of the process, if it could be determined.
    pub cwd: Option<PathBuf>,
    /// Absolute form of the path that was expected to exist.
    pub absolute: PathBuf,
    /// Nearest existing ancestor of the expected path.
    pub listed_dir: Option<PathBuf>,
    /// Sorted entry names of `listed_dir`; directories end in `/`.
    pub entries: Vec<String>,
    /// Entries left out of `entries`.
    pub omitted: usize,
}

/// Builds the diagnostic context for a path that does not exist.
pub fn describe_missing(path: &Path) -> MissingFileContext {
    let cwd = std::env::current_dir().ok();
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let listed_dir = absolute
        .ancestors()
        .skip(1)
        .find(|dir| dir.is_dir())
        .map(Path::to_path_buf);

    let mut entries = listed_dir
        .as_deref()
        .map(list_entries)
        .unwrap_or_default();
    entries.sort();

    let omitted = entries.len().saturating_sub(MAX_LISTED);
    entries.truncate(MAX_LISTED);

    MissingFileContext {
        cwd,
        absolute,
        listed_dir,
        entries,
        omitted,
    }
}

fn list_entries(dir: &Path) -> Vec<String> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            log::debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                format!("{}/", name)
            } else {
                name
            }
        })
        .collect()
}

impl fmt::Display for MissingFileContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cwd {
            Some(cwd) => writeln!(f, "  working directory: {}", cwd.display())?,
            None => writeln!(f, "  working directory: <unavailable>")?,
        }
        write!(f, "  expected path:     {}", self.absolute.display())?;

        if let Some(dir) = &self.listed_dir {
            write!(f, "\n  contents of {}:", dir.display())?;
            if self.entries.is_empty() {
                write!(f, "\n    (empty)")?;
            }
            for entry in &self.entries {
                write!(f, "\n    {}", entry)?;
            }
            if self.omitted > 0 {
                write!(f, "\n    ... and {} more", self.omitted)?;
            }
        }

        Ok(())
    }
}
