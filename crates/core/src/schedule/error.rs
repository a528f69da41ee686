use thiserror::Error;

use crate::remote::RemoteError;

/// Errors that can occur when validating and committing a scheduled event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No account selected; indicates a caller bug rather than user error.
    #[error("An account is required to schedule an event")]
    MissingAccount,
    /// No hobby selected; indicates a caller bug rather than user error.
    #[error("A hobby is required to schedule an event")]
    MissingHobby,
    #[error("Invalid date, expected DD.MM.YYYY")]
    InvalidDate,
    #[error("Invalid time, expected HH:MM")]
    InvalidTime,
    #[error("Scheduled time must be in the future")]
    InPast,
    #[error("Time does not exist in the local timezone")]
    NonexistentLocalTime,
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Result type for scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        assert_eq!(
            ScheduleError::InvalidDate.to_string(),
            "Invalid date, expected DD.MM.YYYY"
        );
        assert_eq!(
            ScheduleError::InvalidTime.to_string(),
            "Invalid time, expected HH:MM"
        );
    }

    #[test]
    fn test_remote_message_passes_through() {
        let error = ScheduleError::from(RemoteError::Rejected("slot conflict".to_string()));
        assert_eq!(error.to_string(), "slot conflict");
    }
}
