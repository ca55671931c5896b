//! Application state shared by all request handlers.

use std::sync::Arc;

use eventcal_core::storage::EventRepository;

use crate::{config::Config, storage::InMemoryEventStore};

/// Shared application state.
///
/// Cloned for each request handler. The event store is injected at
/// construction time so tests can build isolated instances.
#[derive(Clone)]
pub struct AppState {
    /// Event store trait object.
    pub event_repo: Arc<dyn EventRepository>,
    /// Runtime configuration.
    pub config: Config,
}

impl AppState {
    /// Creates a new AppState backed by the given event store.
    pub fn new(event_repo: Arc<dyn EventRepository>, config: Config) -> Self {
        Self { event_repo, config }
    }

    /// Creates a new AppState with an empty in-memory store.
    pub fn in_memory(config: Config) -> Self {
        Self::new(Arc::new(InMemoryEventStore::new()), config)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(Config::default())
    }
}
