use thiserror::Error;

/// Access keys accepted when the config file does not override them
pub const DEFAULT_ACCESS_KEYS: &[&str] = &["ROBO2026", "FOCUS123", "INSTITUTION01"];

/// Why a login attempt was refused. Rendered inline on the login page,
/// never propagated as a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter your name")]
    EmptyName,
    #[error("Please enter your access key")]
    EmptyKey,
    #[error("Invalid access key. Check with your institution.")]
    UnknownKey,
}

/// Validate a login attempt against the accepted key set
pub fn validate_login(name: &str, key: &str, accepted: &[String]) -> Result<(), LoginError> {
    if name.trim().is_empty() {
        return Err(LoginError::EmptyName);
    }
    if key.trim().is_empty() {
        return Err(LoginError::EmptyKey);
    }
    if !accepted.iter().any(|k| k == key.trim()) {
        return Err(LoginError::UnknownKey);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Vec<String> {
        DEFAULT_ACCESS_KEYS.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_valid_login() {
        assert_eq!(validate_login("Alex", "ROBO2026", &keys()), Ok(()));
        assert_eq!(validate_login("Alex", "FOCUS123", &keys()), Ok(()));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            validate_login("   ", "ROBO2026", &keys()),
            Err(LoginError::EmptyName)
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(validate_login("Alex", "", &keys()), Err(LoginError::EmptyKey));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert_eq!(
            validate_login("Alex", "LETMEIN", &keys()),
            Err(LoginError::UnknownKey)
        );
    }

    #[test]
    fn test_key_whitespace_trimmed() {
        assert_eq!(validate_login("Alex", " ROBO2026 ", &keys()), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LoginError::EmptyName.to_string(), "Please enter your name");
        assert!(LoginError::UnknownKey.to_string().contains("Invalid access key"));
    }
}
