//! Xcode project deployment target.
//!
//! `project.pbxproj` carries one `IPHONEOS_DEPLOYMENT_TARGET` build setting per
//! build configuration (project and target level, Debug and Release). All of
//! them are set to the target version.

use crate::config::{PatchConfig, TargetVersion};
use crate::error::Result;
use crate::fs::{overwrite, read_text};
use regex::{Captures, Regex};
use std::path::PathBuf;

/// A deployment-target setting, up to (not including) its terminating `;`.
const DEPLOYMENT_TARGET: &str = r"IPHONEOS_DEPLOYMENT_TARGET = [^;]*";

/// Result of rewriting project content in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTargetRewrite {
    pub content: String,
    /// Settings found.
    pub entries: usize,
    /// Settings whose value differed from the target.
    pub updated: usize,
}

/// What `patch_pbxproj` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PbxprojOutcome {
    /// The project file does not exist; nothing was done.
    Missing(PathBuf),
    /// Every setting already matched; the file was not written.
    UpToDate { path: PathBuf, entries: usize },
    /// At least one setting changed and the file was written.
    Updated {
        path: PathBuf,
        entries: usize,
        updated: usize,
    },
}

/// The build setting as it appears after patching, without the `;`.
pub fn deployment_target_setting(version: &TargetVersion) -> String {
    format!("IPHONEOS_DEPLOYMENT_TARGET = {}", version)
}

/// Sets every `IPHONEOS_DEPLOYMENT_TARGET` value in `content` to `version`.
pub fn rewrite_deployment_targets(
    content: &str,
    version: &TargetVersion,
) -> Result<DeploymentTargetRewrite> {
    let pattern = Regex::new(DEPLOYMENT_TARGET)?;
    let replacement = deployment_target_setting(version);

    let mut entries = 0;
    let mut updated = 0;
    let new_content = pattern
        .replace_all(content, |caps: &Captures| {
            entries += 1;
            if caps[0] != replacement {
                log::debug!("`{}` → `{}`", &caps[0], replacement);
                updated += 1;
            }
            replacement.clone()
        })
        .into_owned();

    Ok(DeploymentTargetRewrite {
        content: new_content,
        entries,
        updated,
    })
}

/// Pins every deployment-target setting in the Xcode project.
///
/// The project file is optional: when it is missing this logs a warning and
/// returns `Missing`. The file is only written when something changed.
pub fn patch_pbxproj(config: &PatchConfig) -> Result<PbxprojOutcome> {
    let path = config.pbxproj_path();
    log::debug!("Patching Xcode project: {}", path.display());

    if !path.exists() {
        log::warn!("Xcode project not found: {}", path.display());
        return Ok(PbxprojOutcome::Missing(path));
    }

    let original = read_text(&path)?;
    let rewrite = rewrite_deployment_targets(&original, &config.target_version)?;

    if rewrite.entries == 0 {
        log::warn!(
            "No IPHONEOS_DEPLOYMENT_TARGET settings in {}",
            path.display()
        );
    }

    if rewrite.content == original {
        log::debug!("File content unchanged, skipping: {}", path.display());
        return Ok(PbxprojOutcome::UpToDate {
            path,
            entries: rewrite.entries,
        });
    }

    overwrite(&path, &rewrite.content, config.dry_run)?;

    Ok(PbxprojOutcome::Updated {
        path,
        entries: rewrite.entries,
        updated: rewrite.updated,
    })
}
