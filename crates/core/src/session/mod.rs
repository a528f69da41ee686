mod error;
mod handle;
mod lifecycle;
mod types;
mod validation;

pub use error::{Result, SessionError, ValidationError};
pub use handle::SessionHandle;
pub use lifecycle::{Collections, SessionLifecycle};
pub use types::{Account, Session};
pub use validation::{is_valid_email, validate_credentials, validate_registration};
