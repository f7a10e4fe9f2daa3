use super::Version;
use crate::error::UpgradeError;

/// Gates an upgrade of an installed resource.
///
/// Succeeds with the parsed candidate only when it is strictly greater than
/// the installed version; equal or older candidates are rejected.
pub fn check_upgrade(installed: &str, candidate: &str) -> Result<Version, UpgradeError> {
    let installed_version = Version::parse(installed)?;
    let candidate_version = Version::parse(candidate)?;

    if candidate_version > installed_version {
        Ok(candidate_version)
    } else {
        Err(UpgradeError::NotNewer {
            installed: installed.to_string(),
            candidate: candidate.to_string(),
        })
    }
}
