use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::serde::deserialize_event_date;

/// Identifier of the user owning a set of events.
pub type UserId = u64;

/// Identifier of an event, unique only within one user's event list.
pub type EventId = u64;

/// A single calendar entry owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: EventId,
    pub user_id: UserId,
    pub text: String,
    /// When the event happens, in the host's local time zone.
    #[serde(deserialize_with = "deserialize_event_date")]
    pub date: DateTime<Local>,
}

impl Event {
    /// Returns the local calendar date the event falls on.
    pub fn local_date(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// An event that has not been stored yet and has no id assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub user_id: UserId,
    pub text: String,
    pub date: DateTime<Local>,
}

impl NewEvent {
    pub fn new(user_id: UserId, text: impl Into<String>, date: DateTime<Local>) -> Self {
        Self {
            user_id,
            text: text.into(),
            date,
        }
    }

    /// Turns this into a stored event with the given id.
    pub fn into_event(self, event_id: EventId) -> Event {
        Event {
            event_id,
            user_id: self.user_id,
            text: self.text,
            date: self.date,
        }
    }
}
