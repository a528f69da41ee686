use thiserror::Error;

use crate::remote::RemoteError;

/// Errors raised by local input validation, before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username is required")]
    MissingUsername,
    #[error("Password is required")]
    MissingPassword,
    #[error("Email is required")]
    MissingEmail,
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
}

/// Errors that can occur during session transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No authenticated account")]
    NotAuthenticated,
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::MissingUsername.to_string(),
            "Username is required"
        );
        assert_eq!(
            ValidationError::InvalidEmail("not-an-email".to_string()).to_string(),
            "Invalid email format: not-an-email"
        );
    }

    #[test]
    fn test_remote_error_message_passes_through() {
        let error = SessionError::from(RemoteError::Rejected("wrong credentials".to_string()));
        assert_eq!(error.to_string(), "wrong credentials");
    }
}
