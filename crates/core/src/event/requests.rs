//! API request types for event operations.
//!
//! Pure data types shared by the server handlers and the store; no I/O.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_event_date;

use super::types::{Event, UserId};

/// Request payload for creating a new event.
///
/// Every field is optional on the wire so that a missing field surfaces as a
/// validation error rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEventRequest {
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "deserialize_optional_event_date")]
    pub date: Option<DateTime<Local>>,
}

impl CreateEventRequest {
    pub fn new(user_id: UserId, text: impl Into<String>, date: DateTime<Local>) -> Self {
        Self {
            user_id,
            text: text.into(),
            date: Some(date),
        }
    }
}

/// Request payload for a partial event update.
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_event_date"
    )]
    pub date: Option<DateTime<Local>>,
}

impl UpdateEventRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the event date.
    pub fn with_date(mut self, date: DateTime<Local>) -> Self {
        self.date = Some(date);
        self
    }

    /// Returns true if the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.date.is_none()
    }

    /// Apply updates to an existing event.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(text) = self.text {
            event.text = text;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
    }
}
