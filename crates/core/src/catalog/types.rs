use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::CatalogError;

/// The closed range of valid hobby difficulty ratings.
pub const DIFFICULTY_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// An entry in the shared hobby catalog.
///
/// Created by an authenticated account, visible to everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hobby {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    /// Subjective difficulty rating in [1, 5].
    pub difficulty: Option<u8>,
}

impl Hobby {
    /// Creates a new hobby with the given name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            category: None,
            difficulty: None,
        }
    }

    /// Sets the category for this hobby.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the difficulty rating for this hobby.
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Sets a specific ID for this hobby (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// Validates a hobby before submitting it for creation.
pub fn validate_hobby(hobby: &Hobby) -> Result<(), CatalogError> {
    if hobby.name.trim().is_empty() {
        return Err(CatalogError::EmptyName);
    }
    if let Some(difficulty) = hobby.difficulty {
        if !DIFFICULTY_RANGE.contains(&difficulty) {
            return Err(CatalogError::DifficultyOutOfRange(difficulty));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hobby_builder() {
        let hobby = Hobby::new("Chess", "Board game of strategy")
            .with_category("games")
            .with_difficulty(3);

        assert_eq!(hobby.name, "Chess");
        assert_eq!(hobby.description, "Board game of strategy");
        assert_eq!(hobby.category, Some("games".to_string()));
        assert_eq!(hobby.difficulty, Some(3));
    }

    #[test]
    fn test_validate_hobby_success() {
        let hobby = Hobby::new("Climbing", "Indoor bouldering").with_difficulty(5);
        assert!(validate_hobby(&hobby).is_ok());
    }

    #[test]
    fn test_validate_hobby_without_optionals() {
        let hobby = Hobby::new("Origami", "Paper folding");
        assert!(validate_hobby(&hobby).is_ok());
    }

    #[test]
    fn test_validate_hobby_empty_name() {
        let hobby = Hobby::new("", "No name");
        assert_eq!(validate_hobby(&hobby), Err(CatalogError::EmptyName));

        let hobby = Hobby::new("   ", "Whitespace name");
        assert_eq!(validate_hobby(&hobby), Err(CatalogError::EmptyName));
    }

    #[test]
    fn test_validate_hobby_difficulty_bounds() {
        let hobby = Hobby::new("Chess", "Board game").with_difficulty(0);
        assert_eq!(
            validate_hobby(&hobby),
            Err(CatalogError::DifficultyOutOfRange(0))
        );

        let hobby = Hobby::new("Chess", "Board game").with_difficulty(6);
        assert_eq!(
            validate_hobby(&hobby),
            Err(CatalogError::DifficultyOutOfRange(6))
        );

        for difficulty in 1..=5 {
            let hobby = Hobby::new("Chess", "Board game").with_difficulty(difficulty);
            assert!(validate_hobby(&hobby).is_ok());
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let hobby = Hobby::new("Chess", "Board game").with_difficulty(2);
        let json = serde_json::to_string(&hobby).unwrap();
        let back: Hobby = serde_json::from_str(&json).unwrap();
        assert_eq!(hobby, back);
    }
}
