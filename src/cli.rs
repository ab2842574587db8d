use crate::config::{DEFAULT_PBXPROJ, DEFAULT_PODFILE, DEFAULT_TARGET_VERSION};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Pin the iOS deployment target of a Capacitor project.
///
/// Run from the project root after `npx cap sync ios` and before the native
/// build. Sets `platform :ios` in the Podfile and every
/// `IPHONEOS_DEPLOYMENT_TARGET` in the Xcode project.
#[derive(Parser, Debug, Clone)]
#[command(name = "ios-deployment-target", version, verbatim_doc_comment)]
pub struct Cli {
    /// Minimum iOS version to pin
    #[arg(long, short = 't', value_name = "VERSION", default_value = DEFAULT_TARGET_VERSION)]
    pub target: String,

    /// Project root the file paths resolve against
    #[arg(long, short = 'C', value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// CocoaPods manifest (must exist)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_PODFILE)]
    pub podfile: PathBuf,

    /// Xcode project file (skipped if missing)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_PBXPROJ)]
    pub pbxproj: PathBuf,

    /// Show what would change without writing any file
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_arguments_use_defaults() {
        let cli = Cli::try_parse_from(["ios-deployment-target"]).unwrap();

        assert_eq!(cli.target, "14.0");
        assert_eq!(cli.project_dir, PathBuf::from("."));
        assert_eq!(cli.podfile, PathBuf::from("ios/App/Podfile"));
        assert_eq!(
            cli.pbxproj,
            PathBuf::from("ios/App/App.xcodeproj/project.pbxproj")
        );
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "ios-deployment-target",
            "-t",
            "13.0",
            "-C",
            "mobile",
            "--dry-run",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.target, "13.0");
        assert_eq!(cli.project_dir, PathBuf::from("mobile"));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["ios-deployment-target", "14.0"]).is_err());
    }
}
