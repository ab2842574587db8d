//! Console output.
//!
//! Status lines go to stdout as each step finishes; `Report` collects what
//! happened to each file and prints a summary at the end. Fatal errors are
//! printed by the binary entry point.

use crate::patch::{PbxprojOutcome, PlatformEdit, PodfileOutcome};
use colored::Colorize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

pub fn success(message: impl Display) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn info(message: impl Display) {
    println!("{} {}", "ℹ".cyan().bold(), message);
}

pub fn warning(message: impl Display) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    PlatformReplaced,
    PlatformInserted,
    PlatformUnchanged,
    TargetsUpdated { updated: usize, entries: usize },
    TargetsUpToDate { entries: usize },
    Skipped,
}

impl Change {
    /// Returns true if the file was (or in dry-run, would be) rewritten.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Change::PlatformReplaced | Change::PlatformInserted | Change::TargetsUpdated { .. }
        )
    }

    fn describe(&self) -> String {
        match self {
            Change::PlatformReplaced => "platform line updated".to_string(),
            Change::PlatformInserted => "platform line added".to_string(),
            Change::PlatformUnchanged => "platform line already current".to_string(),
            Change::TargetsUpdated { updated, entries } => format!(
                "{} of {} deployment target{} updated",
                updated,
                entries,
                if *entries == 1 { "" } else { "s" }
            ),
            Change::TargetsUpToDate { entries } => format!(
                "{} deployment target{} already current",
                entries,
                if *entries == 1 { "" } else { "s" }
            ),
            Change::Skipped => "not found, skipped".to_string(),
        }
    }
}

/// Per-file record of a patch run.
#[derive(Debug)]
pub struct Report {
    project_dir: PathBuf,
    dry_run: bool,
    entries: Vec<(PathBuf, Change)>,
}

impl Report {
    pub fn new(project_dir: &Path, dry_run: bool) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            dry_run,
            entries: Vec::new(),
        }
    }

    fn record(&mut self, path: &Path, change: Change) {
        self.entries.push((path.to_path_buf(), change));
    }

    pub fn record_podfile(&mut self, outcome: &PodfileOutcome) {
        let change = match (outcome.changed, outcome.edit) {
            (false, _) => Change::PlatformUnchanged,
            (true, PlatformEdit::Replaced) => Change::PlatformReplaced,
            (true, PlatformEdit::Inserted) => Change::PlatformInserted,
        };
        self.record(&outcome.path, change);
    }

    pub fn record_pbxproj(&mut self, outcome: &PbxprojOutcome) {
        match outcome {
            PbxprojOutcome::Missing(path) => self.record(path, Change::Skipped),
            PbxprojOutcome::UpToDate { path, entries } => {
                self.record(path, Change::TargetsUpToDate { entries: *entries })
            }
            PbxprojOutcome::Updated {
                path,
                entries,
                updated,
            } => self.record(
                path,
                Change::TargetsUpdated {
                    updated: *updated,
                    entries: *entries,
                },
            ),
        }
    }

    /// Number of files rewritten (or that would be, in dry-run).
    pub fn writes(&self) -> usize {
        self.entries.iter().filter(|(_, c)| c.is_write()).count()
    }

    /// Prints the per-file summary.
    ///
    /// Paths are relative to the project dir with forward slashes.
    pub fn print_summary(&self) {
        if self.dry_run {
            println!("\n{}", "DRY RUN - No changes were written".yellow().bold());
        } else {
            println!("\n{}", "Summary:".bold());
        }

        for (path, change) in &self.entries {
            let marker = match change {
                Change::Skipped => "•".yellow().to_string(),
                c if c.is_write() => "✓".green().to_string(),
                _ => "•".dimmed().to_string(),
            };
            println!(
                "   {} {} ({})",
                marker,
                self.display_path(path).dimmed(),
                change.describe()
            );
        }

        println!();
        let writes = self.writes();
        if self.dry_run {
            println!(
                "{} {} would be modified. Run without {} to apply.",
                writes.to_string().cyan().bold(),
                if writes == 1 { "file" } else { "files" },
                "--dry-run".cyan()
            );
        } else if writes == 0 {
            println!("{}", "No changes needed".yellow());
        } else {
            println!(
                "{} Updated {} {}",
                "✓".green().bold(),
                writes,
                if writes == 1 { "file" } else { "files" }
            );
        }
    }

    fn display_path(&self, path: &Path) -> String {
        let relative =
            pathdiff::diff_paths(path, &self.project_dir).unwrap_or_else(|| path.to_path_buf());
        relative.to_string_lossy().replace('\\', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_print_summary_empty() {
        let temp = TempDir::new().unwrap();
        let report = Report::new(temp.path(), false);

        assert!(report.entries.is_empty());
        // Should not panic
        report.print_summary();
    }

    #[test]
    fn test_records_podfile_outcomes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ios/App/Podfile");
        let mut report = Report::new(temp.path(), false);

        report.record_podfile(&PodfileOutcome {
            path: path.clone(),
            edit: PlatformEdit::Replaced,
            changed: false,
        });
        report.record_podfile(&PodfileOutcome {
            path,
            edit: PlatformEdit::Inserted,
            changed: true,
        });

        assert_eq!(report.entries[0].1, Change::PlatformUnchanged);
        assert_eq!(report.entries[1].1, Change::PlatformInserted);
        assert_eq!(report.writes(), 1);
    }

    #[test]
    fn test_skipped_project_is_not_a_write() {
        let temp = TempDir::new().unwrap();
        let mut report = Report::new(temp.path(), true);

        report.record_pbxproj(&PbxprojOutcome::Missing(temp.path().join("project.pbxproj")));
        report.record_pbxproj(&PbxprojOutcome::UpToDate {
            path: temp.path().join("project.pbxproj"),
            entries: 2,
        });

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.writes(), 0);
        report.print_summary();
    }

    #[test]
    fn test_display_path_is_relative() {
        let temp = TempDir::new().unwrap();
        let report = Report::new(temp.path(), false);

        let shown = report.display_path(&temp.path().join("ios").join("App").join("Podfile"));

        assert_eq!(shown, "ios/App/Podfile");
    }

    #[test]
    fn test_describe_pluralizes() {
        assert_eq!(
            Change::TargetsUpdated {
                updated: 1,
                entries: 1
            }
            .describe(),
            "1 of 1 deployment target updated"
        );
        assert_eq!(
            Change::TargetsUpToDate { entries: 4 }.describe(),
            "4 deployment targets already current"
        );
    }
}
