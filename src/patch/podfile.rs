//! Podfile platform declaration.
//!
//! Handles the single line CocoaPods uses to pick the minimum iOS version:
//! ```ruby
//! platform :ios, '14.0'  # ← Updated
//! target 'App' do
//! ```

use crate::config::{PatchConfig, TargetVersion};
use crate::error::{PatchError, Result};
use crate::fs::{describe_missing, overwrite, read_text};
use regex::{NoExpand, Regex};
use std::path::PathBuf;

/// Start of any platform declaration, quoted version or not.
const PLATFORM_LINE: &str = r"(?m)^platform :ios";

/// The rewritable part of a declaration.
const PLATFORM_DECLARATION: &str = r"(?m)^platform :ios, '[^']*'";

/// How the platform line was brought up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEdit {
    /// An existing declaration had its version replaced.
    Replaced,
    /// No declaration existed; one was prepended.
    Inserted,
}

/// Result of rewriting Podfile content in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRewrite {
    pub content: String,
    pub edit: PlatformEdit,
    /// `platform :ios` lines found before the rewrite.
    pub declarations: usize,
}

/// What `patch_podfile` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodfileOutcome {
    pub path: PathBuf,
    pub edit: PlatformEdit,
    /// Whether the content differs from what was on disk before.
    pub changed: bool,
}

/// The exact line a patched Podfile must contain.
pub fn platform_declaration(version: &TargetVersion) -> String {
    format!("platform :ios, '{}'", version)
}

/// Points every `platform :ios` declaration at `version`, or prepends one.
///
/// Every line starting with `platform :ios, '<version>'` is rewritten. A
/// declaration whose version is not in single quotes is left unchanged; if no
/// other declaration gets rewritten, the post-write check then rejects the file.
pub fn rewrite_platform(content: &str, version: &TargetVersion) -> Result<PlatformRewrite> {
    let line_pattern = Regex::new(PLATFORM_LINE)?;
    let declarations = line_pattern.find_iter(content).count();
    let replacement = platform_declaration(version);

    if declarations == 0 {
        log::debug!("No platform line found, prepending `{}`", replacement);
        return Ok(PlatformRewrite {
            content: format!("{}\n{}", replacement, content),
            edit: PlatformEdit::Inserted,
            declarations,
        });
    }

    if declarations > 1 {
        log::warn!(
            "Podfile has {} `platform :ios` lines; all of them are updated",
            declarations
        );
    }

    let declaration = Regex::new(PLATFORM_DECLARATION)?;
    let new_content = declaration
        .replace_all(content, NoExpand(&replacement))
        .into_owned();

    Ok(PlatformRewrite {
        content: new_content,
        edit: PlatformEdit::Replaced,
        declarations,
    })
}

/// Returns true if `content` declares exactly `platform :ios, '<version>'`.
pub fn verify_platform(content: &str, version: &TargetVersion) -> bool {
    content.contains(&platform_declaration(version))
}

/// Pins the Podfile's platform line to the configured target version.
///
/// The Podfile is mandatory: a missing file is a `MissingFile` error. The
/// rewritten content always replaces the file, which is then read back and
/// checked. In dry-run mode the in-memory result is checked instead.
///
/// # Errors
///
/// - `MissingFile`: the Podfile does not exist
/// - `VerificationFailed`: the file does not contain the expected line after writing
/// - `Other`: the file could not be read or written
pub fn patch_podfile(config: &PatchConfig) -> Result<PodfileOutcome> {
    let path = config.podfile_path();
    log::debug!("Patching Podfile: {}", path.display());

    if !path.exists() {
        return Err(PatchError::MissingFile {
            label: "Podfile",
            context: describe_missing(&path),
        });
    }

    let original = read_text(&path)?;
    let rewrite = rewrite_platform(&original, &config.target_version)?;

    overwrite(&path, &rewrite.content, config.dry_run)?;

    let written = if config.dry_run {
        rewrite.content.clone()
    } else {
        read_text(&path)?
    };

    if !verify_platform(&written, &config.target_version) {
        return Err(PatchError::VerificationFailed {
            path,
            expected: platform_declaration(&config.target_version),
        });
    }

    Ok(PodfileOutcome {
        changed: rewrite.content != original,
        path,
        edit: rewrite.edit,
    })
}
