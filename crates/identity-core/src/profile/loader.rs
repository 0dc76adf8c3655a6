//! Profile loading from JSON snapshots.

use std::path::Path;

use crate::error::{ProfileError, Result};

use super::types::UserProfile;

/// Parse and validate a profile from JSON text.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the profile breaks an invariant.
pub fn parse_profile(json: &str) -> Result<UserProfile> {
    let profile: UserProfile = serde_json::from_str(json)?;
    profile.validate()?;
    tracing::debug!(profile = %profile.id, paid = profile.is_paid, "profile parsed");
    Ok(profile)
}

/// Read, parse and validate a profile file.
///
/// # Errors
///
/// Returns [`ProfileError::LoadFailed`] when the file cannot be read, or the
/// parse/validation error for its contents.
pub fn load_profile(path: &Path) -> Result<UserProfile> {
    let content = std::fs::read_to_string(path).map_err(|e| ProfileError::LoadFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_profile(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::profile::fixtures::mock_user_paid;

    #[test]
    fn test_parse_profile_roundtrip() {
        let json = serde_json::to_string(&mock_user_paid()).unwrap();
        let parsed = parse_profile(&json).unwrap();
        assert_eq!(parsed, mock_user_paid());
    }

    #[test]
    fn test_parse_profile_rejects_invalid() {
        let mut user = mock_user_paid();
        user.is_paid = false;
        let json = serde_json::to_string(&user).unwrap();
        assert!(matches!(parse_profile(&json), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_parse_profile_rejects_malformed_json() {
        assert!(matches!(parse_profile("{"), Err(CoreError::Json(_))));
    }

    #[test]
    fn test_load_profile_missing_file() {
        let err = load_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(matches!(err, CoreError::Profile(ProfileError::LoadFailed { .. })));
    }
}
