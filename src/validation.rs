use crate::error::{PatchError, Result};

/// Longest dotted version accepted: `major.minor.patch`.
const MAX_COMPONENTS: usize = 3;

/// Checks that `version` is a dotted numeric iOS version such as `14.0`.
///
/// The value is spliced verbatim into a Ruby string literal and an Xcode
/// build setting, so anything beyond digits and dots is rejected.
pub fn validate_target_version(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(PatchError::InvalidVersion(
            version.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    if !version.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(PatchError::InvalidVersion(
            version.to_string(),
            "can only contain digits and dots".to_string(),
        ));
    }

    if version.split('.').any(str::is_empty) {
        return Err(PatchError::InvalidVersion(
            version.to_string(),
            "version components cannot be empty".to_string(),
        ));
    }

    if version.split('.').count() > MAX_COMPONENTS {
        return Err(PatchError::InvalidVersion(
            version.to_string(),
            "expected at most major.minor.patch".to_string(),
        ));
    }

    Ok(())
}
