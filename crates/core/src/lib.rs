//! hobbysync_core - client-side synchronization and scheduling core.
//!
//! Keeps the account, hobby catalog, and scheduled-event collections
//! consistent between a persisted key-value cache and the remote service,
//! and validates new scheduled events before committing them.

pub mod cache;
pub mod catalog;
pub mod remote;
pub mod schedule;
pub mod serde;
pub mod session;
