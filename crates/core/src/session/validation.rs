//! Pure validation of login and registration input.
//!
//! These checks run locally and short-circuit before any network call.

use super::error::ValidationError;

/// Validates login credentials.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::MissingUsername);
    }
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok(())
}

/// Validates registration input.
///
/// Requires all three fields and a minimal `local@domain.tld` email shape.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::MissingUsername);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Checks a minimal `local@domain.tld` email shape.
///
/// The local part and domain must be non-empty, the domain must contain a
/// dot with characters on both sides, and whitespace is rejected anywhere.
/// This is deliberately not a full RFC 5322 check; the service remains the
/// authority.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials_success() {
        assert!(validate_credentials("edik", "123456").is_ok());
    }

    #[test]
    fn test_validate_credentials_missing_username() {
        assert_eq!(
            validate_credentials("", "123456"),
            Err(ValidationError::MissingUsername)
        );
        assert_eq!(
            validate_credentials("   ", "123456"),
            Err(ValidationError::MissingUsername)
        );
    }

    #[test]
    fn test_validate_credentials_missing_password() {
        assert_eq!(
            validate_credentials("edik", ""),
            Err(ValidationError::MissingPassword)
        );
    }

    #[test]
    fn test_validate_registration_success() {
        assert!(validate_registration("edik", "edik@example.com", "123456").is_ok());
    }

    #[test]
    fn test_validate_registration_missing_fields() {
        assert_eq!(
            validate_registration("", "edik@example.com", "123456"),
            Err(ValidationError::MissingUsername)
        );
        assert_eq!(
            validate_registration("edik", "", "123456"),
            Err(ValidationError::MissingEmail)
        );
        assert_eq!(
            validate_registration("edik", "edik@example.com", ""),
            Err(ValidationError::MissingPassword)
        );
    }

    #[test]
    fn test_validate_registration_bad_email() {
        assert_eq!(
            validate_registration("edik", "not-an-email", "123456"),
            Err(ValidationError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[test]
    fn test_is_valid_email_accepts_minimal_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("edik@example.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
    }

    #[test]
    fn test_is_valid_email_rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("edik@"));
        assert!(!is_valid_email("edik@example"));
        assert!(!is_valid_email("edik@.com"));
        assert!(!is_valid_email("edik@example."));
    }

    #[test]
    fn test_is_valid_email_rejects_whitespace_and_extra_at() {
        assert!(!is_valid_email("ed ik@example.com"));
        assert!(!is_valid_email("edik@exa mple.com"));
        assert!(!is_valid_email("edik@exa@mple.com"));
    }
}
