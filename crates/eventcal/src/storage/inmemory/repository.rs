//! In-memory event store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use eventcal_core::event::{
    filter_events_by_period, Event, EventId, NewEvent, Period, UpdateEventRequest, UserId,
};
use eventcal_core::storage::{EventRepository, RepositoryError, Result};

/// In-memory per-user event store.
///
/// One reader-writer lock guards the whole map: mutations hold the write
/// lock for lookup, scan and change together, queries share the read lock.
/// Each user's events are kept in insertion order until a delete swaps the
/// last event into the removed slot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    events: Arc<RwLock<HashMap<UserId, Vec<Event>>>>,
}

impl InMemoryEventStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Picks the id for a user's next event.
///
/// The id is the sequence length plus one, so deleting the last event frees
/// its id for the next create. When a swap-remove left a hole and that id is
/// still held by a live event, the id moves past the highest live id instead.
fn next_event_id(events: &[Event]) -> EventId {
    let candidate = events.len() as EventId + 1;
    if events.iter().all(|event| event.event_id != candidate) {
        return candidate;
    }
    events.iter().map(|event| event.event_id).max().unwrap_or(0) + 1
}

#[async_trait]
impl EventRepository for InMemoryEventStore {
    async fn create_event(&self, event: NewEvent) -> Event {
        let mut events = self.events.write().await;
        let user_events = events.entry(event.user_id).or_default();

        let event = event.into_event(next_event_id(user_events));
        user_events.push(event.clone());
        event
    }

    async fn update_event(
        &self,
        user_id: UserId,
        event_id: EventId,
        update: UpdateEventRequest,
    ) -> Result<Event> {
        let mut events = self.events.write().await;
        let user_events = events
            .get_mut(&user_id)
            .ok_or(RepositoryError::NoSuchUser { user_id })?;

        let event = user_events
            .iter_mut()
            .find(|event| event.event_id == event_id)
            .ok_or(RepositoryError::NoSuchEvent { user_id, event_id })?;

        update.apply_to(event);
        Ok(event.clone())
    }

    async fn delete_event(&self, user_id: UserId, event_id: EventId) -> Result<()> {
        let mut events = self.events.write().await;
        let user_events = events
            .get_mut(&user_id)
            .ok_or(RepositoryError::NoSuchUser { user_id })?;

        let index = user_events
            .iter()
            .position(|event| event.event_id == event_id)
            .ok_or(RepositoryError::NoSuchEvent { user_id, event_id })?;

        user_events.swap_remove(index);
        Ok(())
    }

    async fn get_events(
        &self,
        user_id: UserId,
        period: Period,
        reference: NaiveDate,
    ) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        let user_events = events
            .get(&user_id)
            .ok_or(RepositoryError::NoSuchUser { user_id })?;

        Ok(filter_events_by_period(user_events, period, reference)
            .into_iter()
            .cloned()
            .collect())
    }
}
