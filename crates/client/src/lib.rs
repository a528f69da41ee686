//! hobbysync_client - HTTP client and CLI for the hobbysync service.

pub mod cli;
pub mod client;
pub mod error;
pub mod remote;
pub mod store;

pub use client::HobbySyncClient;
pub use error::{ClientError, Result};
pub use store::JsonFileCache;
