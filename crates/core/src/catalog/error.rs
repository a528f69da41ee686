use thiserror::Error;

/// Errors that can occur when validating hobby catalog entries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Hobby name cannot be empty")]
    EmptyName,
    #[error("Difficulty must be between 1 and 5, got {0}")]
    DifficultyOutOfRange(u8),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
