mod error;
mod mock;
mod requests;
mod traits;

pub use error::{RemoteError, Result};
pub use mock::MockRemote;
pub use requests::{CreateEventRequest, CreateHobbyRequest, RegisterRequest};
pub use traits::RemoteApi;
