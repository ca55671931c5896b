use chrono::{DateTime, Local};

use super::error::EventError;
use super::requests::{CreateEventRequest, UpdateEventRequest};
use super::types::NewEvent;

/// Validates a create request against `now` and turns it into a [`NewEvent`].
///
/// Rules: the user id is non-zero, the text is not blank and the date is
/// strictly after `now`.
pub fn validate_new_event(
    request: CreateEventRequest,
    now: DateTime<Local>,
) -> Result<NewEvent, EventError> {
    if request.user_id == 0 {
        return Err(EventError::MissingUserId);
    }
    if request.text.trim().is_empty() {
        return Err(EventError::EmptyText);
    }
    let date = request.date.ok_or(EventError::MissingDate)?;
    if date <= now {
        return Err(EventError::DateNotInFuture);
    }

    Ok(NewEvent::new(request.user_id, request.text, date))
}

/// Validates the fields present in an update request against `now`.
pub fn validate_update(
    request: &UpdateEventRequest,
    now: DateTime<Local>,
) -> Result<(), EventError> {
    if request.text.as_deref().is_some_and(|text| text.trim().is_empty()) {
        return Err(EventError::EmptyText);
    }
    if request.date.is_some_and(|date| date <= now) {
        return Err(EventError::DateNotInFuture);
    }
    Ok(())
}
