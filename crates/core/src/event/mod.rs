mod error;
mod period;
mod requests;
mod types;
mod validation;

pub use error::EventError;
pub use period::{filter_events_by_period, Period};
pub use requests::{CreateEventRequest, UpdateEventRequest};
pub use types::{Event, EventId, NewEvent, UserId};
pub use validation::{validate_new_event, validate_update};
