use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A committed occurrence of a hobby on the calendar.
///
/// Immutable after creation; appended to the scheduled-events collection
/// only through the `Scheduler` commit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub id: Uuid,
    pub account_id: Uuid,
    pub hobby_id: Uuid,
    /// Denormalized hobby name for display.
    pub hobby_name: String,
    /// Canonical start instant, timezone-normalized.
    pub starts_at: DateTime<Utc>,
}

impl ScheduledEvent {
    /// Creates a new scheduled event.
    pub fn new(
        account_id: Uuid,
        hobby_id: Uuid,
        hobby_name: impl Into<String>,
        starts_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            hobby_id,
            hobby_name: hobby_name.into(),
            starts_at,
        }
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// The calendar day this event falls on, in the device's timezone.
    pub fn local_day(&self) -> NaiveDate {
        self.starts_at.with_timezone(&Local).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_local_day_matches_local_construction() {
        let starts_at = Local
            .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
            .single()
            .unwrap()
            .with_timezone(&Utc);
        let event = ScheduledEvent::new(Uuid::nil(), Uuid::nil(), "Chess", starts_at);

        assert_eq!(
            event.local_day(),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let event = ScheduledEvent::new(
            Uuid::nil(),
            Uuid::nil(),
            "Chess",
            Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
        )
        .with_id(Uuid::nil());

        let bytes = serde_json::to_vec(&event).unwrap();
        let back: ScheduledEvent = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(event, back);
    }
}
