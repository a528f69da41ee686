use uuid::Uuid;

/// Returns the cache key for the account listing snapshot.
pub fn accounts_key() -> String {
    "accounts".to_string()
}

/// Returns the cache key for the hobby catalog snapshot.
pub fn catalog_key() -> String {
    "catalog".to_string()
}

/// Returns the cache key for an account's scheduled events snapshot.
pub fn scheduled_events_key(account_id: Uuid) -> String {
    format!("events:{}", account_id)
}

/// Returns the cache key for the current session's account record.
pub fn session_account_key() -> String {
    "session:account".to_string()
}
