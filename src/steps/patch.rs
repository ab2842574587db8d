//! Orchestration of a patch run.
//!
//! The Podfile is patched first and any failure there ends the run before the
//! Xcode project is opened. Nothing is rolled back: a patched Podfile stays
//! patched whatever happens to the project file.

use crate::config::PatchConfig;
use crate::error::Result;
use crate::patch::pbxproj::deployment_target_setting;
use crate::patch::podfile::platform_declaration;
use crate::patch::{PbxprojOutcome, PlatformEdit, patch_pbxproj, patch_podfile};
use crate::report::{self, Report};
use colored::Colorize;

/// Patches the Podfile, then the Xcode project, and prints a summary.
///
/// # Errors
///
/// Returns the first fatal error: a missing Podfile, a failed Podfile
/// verification, or an I/O failure on either file.
pub fn execute(config: &PatchConfig) -> Result<Report> {
    log::debug!("Configuration: {:?}", config);

    println!(
        "{} iOS deployment target {}",
        "Pinning".cyan().bold(),
        config.target_version.to_string().green().bold()
    );

    let mut summary = Report::new(&config.project_dir, config.dry_run);

    let podfile = patch_podfile(config)?;
    match podfile.edit {
        PlatformEdit::Replaced => report::success("Updated existing platform line"),
        PlatformEdit::Inserted => report::success("Added platform line"),
    }
    report::success(format!(
        "Podfile verified: {}",
        platform_declaration(&config.target_version)
    ));
    summary.record_podfile(&podfile);

    let setting = deployment_target_setting(&config.target_version);
    let pbxproj = patch_pbxproj(config)?;
    match &pbxproj {
        PbxprojOutcome::Missing(_) => report::warning("Xcode project not found, skipping"),
        PbxprojOutcome::UpToDate { .. } => {
            report::info(format!("Xcode project already has {}", setting))
        }
        PbxprojOutcome::Updated { .. } => {
            report::success(format!("Xcode project updated: {}", setting))
        }
    }
    summary.record_pbxproj(&pbxproj);

    summary.print_summary();

    Ok(summary)
}
