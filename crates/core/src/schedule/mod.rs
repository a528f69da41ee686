mod error;
mod parse;
mod projector;
mod types;
mod validator;

pub use error::{Result, ScheduleError};
pub use parse::{combine_local, parse_event_date, parse_event_time, DATE_PATTERN, TIME_PATTERN};
pub use projector::{events_on, project_markings, DayMarker, DayMarking};
pub use types::ScheduledEvent;
pub use validator::{validate_submission, Scheduler};
