use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cache::{scheduled_events_key, CacheAsideStore};
use crate::remote::{CreateEventRequest, RemoteApi};
use crate::session::SessionHandle;

use super::error::{Result, ScheduleError};
use super::parse::{combine_local, parse_event_date, parse_event_time};
use super::types::ScheduledEvent;

/// Validates the inputs of a scheduling submission and builds the wire
/// request.
///
/// `now` is passed explicitly so the temporal boundary is testable; the
/// combined instant must be strictly after it. The request carries the
/// local wall-clock the user entered; the canonical instant only exists to
/// enforce the boundary.
pub fn validate_submission(
    account_id: Option<Uuid>,
    hobby_id: Option<Uuid>,
    date_text: &str,
    time_text: &str,
    now: DateTime<Utc>,
) -> Result<CreateEventRequest> {
    let account_id = account_id.ok_or(ScheduleError::MissingAccount)?;
    let hobby_id = hobby_id.ok_or(ScheduleError::MissingHobby)?;

    let date = parse_event_date(date_text)?;
    let time = parse_event_time(time_text)?;
    let (wall, instant) = combine_local(date, time)?;

    if instant <= now {
        return Err(ScheduleError::InPast);
    }

    Ok(CreateEventRequest {
        account_id,
        hobby_id,
        starts_at: wall,
    })
}

/// Turns free-text date/time input into a committed scheduled event.
#[derive(Clone)]
pub struct Scheduler {
    remote: Arc<dyn RemoteApi>,
    events: Arc<CacheAsideStore<ScheduledEvent>>,
    session: SessionHandle,
}

impl Scheduler {
    pub fn new(
        remote: Arc<dyn RemoteApi>,
        events: Arc<CacheAsideStore<ScheduledEvent>>,
        session: SessionHandle,
    ) -> Self {
        Self {
            remote,
            events,
            session,
        }
    }

    /// Validates and commits a scheduling submission.
    ///
    /// "Now" is evaluated at call time, so a form left open past its
    /// entered time is re-validated correctly. On success the
    /// scheduled-events collection refresh is initiated without blocking,
    /// and the created event's identifier is returned. Concurrent identical
    /// submissions are not deduplicated here; the service is the authority
    /// for duplicate suppression.
    pub async fn validate_and_schedule(
        &self,
        account_id: Option<Uuid>,
        hobby_id: Option<Uuid>,
        date_text: &str,
        time_text: &str,
    ) -> Result<Uuid> {
        let request =
            validate_submission(account_id, hobby_id, date_text, time_text, Utc::now())?;

        let created = self.remote.create_scheduled_event(&request).await?;
        info!(event_id = %created.id, "scheduled event committed");
        self.spawn_events_refresh(request.account_id);

        Ok(created.id)
    }

    /// Initiates a refresh of the account's scheduled events without
    /// blocking the commit that triggered it.
    fn spawn_events_refresh(&self, account_id: Uuid) {
        let scheduler = self.clone();
        tokio::spawn(async move {
            scheduler.refresh_events(account_id).await;
        });
    }

    /// Refreshes the account's scheduled events, skipping the work if the
    /// session has moved on since the commit. A mid-flight logout is caught
    /// by the store's own invalidation guard.
    async fn refresh_events(&self, account_id: Uuid) {
        if !self.session.is_current(account_id).await {
            debug!(%account_id, "skipping events refresh for a superseded account");
            return;
        }
        let remote = self.remote.clone();
        let outcome = self
            .events
            .load(&scheduled_events_key(account_id), move || async move {
                remote.list_scheduled_events(account_id).await
            })
            .await;
        if let Err(e) = outcome {
            warn!(error = %e, "scheduled events refresh failed");
        }
    }
}
