//! In-memory event store.
//!
//! All events live in a single `HashMap<UserId, Vec<Event>>` behind one
//! `Arc<RwLock<_>>`. Data is volatile and lost when the last handle is
//! dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventcal::storage::inmemory::InMemoryEventStore;
//!
//! let store = InMemoryEventStore::new();
//! let event = store.create_event(new_event).await;
//! ```

mod repository;

pub use repository::InMemoryEventStore;
