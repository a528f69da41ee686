//! Pure derivation of calendar view data from the scheduled-events
//! collection.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::ScheduledEvent;

/// A single marker on a calendar day, one per event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarker {
    pub event_id: Uuid,
}

/// Marking state for one calendar day.
///
/// `selected` and "has events" are independent flags: the selected day is
/// present even with zero markers, and a day with markers may also be
/// selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarking {
    pub selected: bool,
    pub markers: Vec<DayMarker>,
}

impl DayMarking {
    /// Returns true if at least one event falls on this day.
    pub fn has_events(&self) -> bool {
        !self.markers.is_empty()
    }
}

/// Derives the day-keyed marking structure for calendar highlighting.
///
/// Events are grouped by their calendar day in local time; markers within
/// a day are ordered by event identifier (stable, not time-ordered). The
/// selected day is always present in the output.
pub fn project_markings(
    events: &[ScheduledEvent],
    selected_day: NaiveDate,
) -> BTreeMap<NaiveDate, DayMarking> {
    let mut markings: BTreeMap<NaiveDate, DayMarking> = BTreeMap::new();

    for event in events {
        markings
            .entry(event.local_day())
            .or_default()
            .markers
            .push(DayMarker { event_id: event.id });
    }

    for marking in markings.values_mut() {
        marking.markers.sort_by_key(|marker| marker.event_id);
    }

    markings.entry(selected_day).or_default().selected = true;

    markings
}

/// Returns the events falling on `day`, in strictly ascending start order.
///
/// Ties on the start instant are broken by event identifier so the order
/// is deterministic.
pub fn events_on(events: &[ScheduledEvent], day: NaiveDate) -> Vec<ScheduledEvent> {
    let mut on_day: Vec<ScheduledEvent> = events
        .iter()
        .filter(|event| event.local_day() == day)
        .cloned()
        .collect();
    on_day.sort_by(|a, b| a.starts_at.cmp(&b.starts_at).then(a.id.cmp(&b.id)));
    on_day
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone, Utc};

    fn local_instant(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(year, month, day, hour, min, 0)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn event_on(day: u32, hour: u32, id: u8) -> ScheduledEvent {
        ScheduledEvent::new(
            Uuid::nil(),
            Uuid::nil(),
            "Chess",
            local_instant(2026, 3, day, hour, 0),
        )
        .with_id(Uuid::from_u128(id as u128))
    }

    fn make_day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    #[test]
    fn test_project_markings_groups_by_day_and_flags_selected() {
        let events = vec![event_on(1, 9, 1), event_on(1, 18, 2), event_on(2, 12, 3)];

        let markings = project_markings(&events, make_day(3));

        assert_eq!(markings.len(), 3);

        let first = &markings[&make_day(1)];
        assert_eq!(first.markers.len(), 2);
        assert!(first.has_events());
        assert!(!first.selected);

        let second = &markings[&make_day(2)];
        assert_eq!(second.markers.len(), 1);

        let selected = &markings[&make_day(3)];
        assert!(selected.selected);
        assert!(!selected.has_events());
        assert!(selected.markers.is_empty());
    }

    #[test]
    fn test_project_markings_selected_day_with_events_carries_both_flags() {
        let events = vec![event_on(1, 9, 1)];

        let markings = project_markings(&events, make_day(1));

        assert_eq!(markings.len(), 1);
        let marking = &markings[&make_day(1)];
        assert!(marking.selected);
        assert!(marking.has_events());
    }

    #[test]
    fn test_project_markings_orders_markers_by_event_id() {
        // Later start but smaller id must come first.
        let events = vec![event_on(1, 18, 2), event_on(1, 9, 5), event_on(1, 12, 1)];

        let markings = project_markings(&events, make_day(2));

        let ids: Vec<Uuid> = markings[&make_day(1)]
            .markers
            .iter()
            .map(|marker| marker.event_id)
            .collect();
        assert_eq!(
            ids,
            vec![
                Uuid::from_u128(1),
                Uuid::from_u128(2),
                Uuid::from_u128(5)
            ]
        );
    }

    #[test]
    fn test_project_markings_empty_events_still_emits_selected_day() {
        let markings = project_markings(&[], make_day(7));

        assert_eq!(markings.len(), 1);
        assert!(markings[&make_day(7)].selected);
    }

    #[test]
    fn test_events_on_sorts_chronologically() {
        let events = vec![event_on(1, 18, 1), event_on(1, 9, 2), event_on(2, 7, 3)];

        let listed = events_on(&events, make_day(1));

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, Uuid::from_u128(2)); // 09:00
        assert_eq!(listed[1].id, Uuid::from_u128(1)); // 18:00
    }

    #[test]
    fn test_events_on_breaks_ties_by_id() {
        let events = vec![event_on(1, 9, 7), event_on(1, 9, 3), event_on(1, 9, 5)];

        let listed = events_on(&events, make_day(1));

        let ids: Vec<Uuid> = listed.iter().map(|event| event.id).collect();
        assert_eq!(
            ids,
            vec![
                Uuid::from_u128(3),
                Uuid::from_u128(5),
                Uuid::from_u128(7)
            ]
        );
    }

    #[test]
    fn test_events_on_day_without_events_is_empty() {
        let events = vec![event_on(1, 9, 1)];
        assert!(events_on(&events, make_day(9)).is_empty());
    }
}
