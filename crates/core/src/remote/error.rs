use thiserror::Error;

/// Errors surfaced from the remote service.
///
/// Rejections carry the service's message verbatim for display; everything
/// else (unreachable, unexpected status, malformed body) collapses to the
/// generic server error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("{0}")]
    Rejected(String),
    #[error("server error")]
    ServerError,
}

/// Result type for remote operations.
pub type Result<T> = std::result::Result<T, RemoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_is_verbatim() {
        let error = RemoteError::Rejected("Username or email already registered".to_string());
        assert_eq!(error.to_string(), "Username or email already registered");
    }

    #[test]
    fn test_server_error_display() {
        assert_eq!(RemoteError::ServerError.to_string(), "server error");
    }
}
