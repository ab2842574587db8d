//! Rewrites of the two files CocoaPods and Xcode read the deployment target from.
//!
//! - **`podfile`**: the `platform :ios, '<version>'` line of the Podfile (mandatory)
//! - **`pbxproj`**: every `IPHONEOS_DEPLOYMENT_TARGET` build setting (optional)
//!
//! Both are regex substitutions over the whole file; neither format is parsed.

pub mod pbxproj;
pub mod podfile;

pub use pbxproj::{PbxprojOutcome, patch_pbxproj};
pub use podfile::{PlatformEdit, PodfileOutcome, patch_podfile};
