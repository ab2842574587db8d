//! Shared fixtures for ios-deployment-target integration tests.
//!
//! These tests lay out a Capacitor-style `ios/App` tree in a temp dir and run
//! the real binary against it.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PODFILE: &str = "ios/App/Podfile";
pub const PBXPROJ: &str = "ios/App/App.xcodeproj/project.pbxproj";

/// Podfile as generated by `npx cap add ios`.
#[allow(unused)]
pub const CAPACITOR_PODFILE: &str = "\
require_relative '../../node_modules/@capacitor/ios/scripts/pods_helpers'

platform :ios, '13.0'
use_frameworks!

install! 'cocoapods', :disable_input_output_paths => true

def capacitor_pods
  pod 'Capacitor', :path => '../../node_modules/@capacitor/ios'
  pod 'CapacitorCordova', :path => '../../node_modules/@capacitor/ios'
end

target 'App' do
  capacitor_pods
end

post_install do |installer|
  assertDeploymentTarget(installer)
end
";

/// Build-configuration section of a generated Xcode project.
#[allow(unused)]
pub const CAPACITOR_PBXPROJ: &str = r#"// !$*UTF8*$!
{
	objects = {
/* Begin XCBuildConfiguration section */
		504EC3141FED79650016851F /* Debug */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				ALWAYS_SEARCH_USER_PATHS = NO;
				IPHONEOS_DEPLOYMENT_TARGET = 13.0;
				SDKROOT = iphoneos;
			};
			name = Debug;
		};
		504EC3151FED79650016851F /* Release */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				ALWAYS_SEARCH_USER_PATHS = NO;
				IPHONEOS_DEPLOYMENT_TARGET = 13.0;
				SDKROOT = iphoneos;
				VALIDATE_PRODUCT = YES;
			};
			name = Release;
		};
		504EC3171FED79650016851F /* Debug */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				IPHONEOS_DEPLOYMENT_TARGET = 13.0;
				PRODUCT_BUNDLE_IDENTIFIER = com.example.app;
			};
			name = Debug;
		};
		504EC3181FED79650016851F /* Release */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				IPHONEOS_DEPLOYMENT_TARGET = 13.0;
				PRODUCT_BUNDLE_IDENTIFIER = com.example.app;
			};
			name = Release;
		};
/* End XCBuildConfiguration section */
	};
}
"#;

/// Creates a project root with the given Podfile and Xcode project contents.
///
/// `None` leaves the corresponding file out.
#[allow(unused)]
pub fn create_project(podfile: Option<&str>, pbxproj: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();

    if let Some(content) = podfile {
        write_file(temp.path(), PODFILE, content);
    }
    if let Some(content) = pbxproj {
        write_file(temp.path(), PBXPROJ, content);
    }

    temp
}

#[allow(unused)]
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

#[allow(unused)]
pub fn read_file(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

/// Runs the binary from `project_root` with `args`.
pub fn run_patch(project_root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("ios-deployment-target");
    cmd.args(args)
        .env_remove("RUST_LOG")
        .current_dir(project_root);

    cmd.assert()
}
