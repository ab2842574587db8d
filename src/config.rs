//! Run configuration shared by both patch steps.
//!
//! Built once from the command line and passed by reference; nothing here is
//! mutated after startup.

use crate::cli::Cli;
use crate::error::{PatchError, Result};
use crate::validation::validate_target_version;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Deployment target used when `--target` is not given.
pub const DEFAULT_TARGET_VERSION: &str = "14.0";

/// CocoaPods manifest, relative to the project root.
pub const DEFAULT_PODFILE: &str = "ios/App/Podfile";

/// Xcode project file, relative to the project root.
pub const DEFAULT_PBXPROJ: &str = "ios/App/App.xcodeproj/project.pbxproj";

/// A validated iOS version string such as `14.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetVersion(String);

impl FromStr for TargetVersion {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self> {
        validate_target_version(s)?;
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a patch run needs to know.
#[derive(Debug, Clone)]
pub struct PatchConfig {
    pub target_version: TargetVersion,
    /// Root that relative `podfile` and `pbxproj` paths resolve against.
    pub project_dir: PathBuf,
    pub podfile: PathBuf,
    pub pbxproj: PathBuf,
    /// Compute and report changes without writing.
    pub dry_run: bool,
}

impl PatchConfig {
    /// Creates a configuration with the standard Capacitor layout.
    pub fn new(target_version: TargetVersion, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_version,
            project_dir: project_dir.into(),
            podfile: PathBuf::from(DEFAULT_PODFILE),
            pbxproj: PathBuf::from(DEFAULT_PBXPROJ),
            dry_run: false,
        }
    }

    /// Builds the configuration from parsed arguments, validating the version.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let target_version = cli.target.parse::<TargetVersion>()?;

        Ok(Self {
            target_version,
            project_dir: cli.project_dir.clone(),
            podfile: cli.podfile.clone(),
            pbxproj: cli.pbxproj.clone(),
            dry_run: cli.dry_run,
        })
    }

    pub fn podfile_path(&self) -> PathBuf {
        self.resolve(&self.podfile)
    }

    pub fn pbxproj_path(&self) -> PathBuf {
        self.resolve(&self.pbxproj)
    }

    // `join` keeps absolute overrides as-is.
    fn resolve(&self, path: &Path) -> PathBuf {
        self.project_dir.join(path)
    }
}
