//! Storage backend implementations.
//!
//! This module provides the concrete implementation of the
//! [`EventRepository`](eventcal_core::storage::EventRepository) trait
//! defined in `eventcal_core::storage`. Events are held in memory only.

pub mod inmemory;

pub use inmemory::InMemoryEventStore;
