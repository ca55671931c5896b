use async_trait::async_trait;
use chrono::NaiveDate;

use crate::event::{Event, EventId, NewEvent, Period, UpdateEventRequest, UserId};

use super::Result;

/// Repository for per-user calendar events.
///
/// Callers hand over already-validated values; the repository enforces only
/// its own invariants (id assignment, existence checks, atomicity).
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Stores a new event and returns it with its assigned id.
    ///
    /// Never fails, including for a user's first event.
    async fn create_event(&self, event: NewEvent) -> Event;

    /// Applies a partial update to an event and returns the updated event.
    async fn update_event(
        &self,
        user_id: UserId,
        event_id: EventId,
        update: UpdateEventRequest,
    ) -> Result<Event>;

    /// Deletes an event.
    async fn delete_event(&self, user_id: UserId, event_id: EventId) -> Result<()>;

    /// Gets a user's events that fall in `period` around `reference`.
    ///
    /// Fails with `NoSuchUser` only when the user never created an event; an
    /// empty period returns an empty list.
    async fn get_events(
        &self,
        user_id: UserId,
        period: Period,
        reference: NaiveDate,
    ) -> Result<Vec<Event>>;

    /// Gets a user's events on the calendar date `date`.
    async fn get_events_for_day(&self, user_id: UserId, date: NaiveDate) -> Result<Vec<Event>> {
        self.get_events(user_id, Period::Day, date).await
    }

    /// Gets a user's events in the ISO week containing `date`.
    async fn get_events_for_week(&self, user_id: UserId, date: NaiveDate) -> Result<Vec<Event>> {
        self.get_events(user_id, Period::Week, date).await
    }

    /// Gets a user's events in the calendar month containing `date`.
    async fn get_events_for_month(&self, user_id: UserId, date: NaiveDate) -> Result<Vec<Event>> {
        self.get_events(user_id, Period::Month, date).await
    }
}
