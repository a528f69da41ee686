mod error;
mod types;

pub use error::{CatalogError, Result};
pub use types::{validate_hobby, Hobby, DIFFICULTY_RANGE};
