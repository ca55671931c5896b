//! Functional core for eventcal: event types, validation, period matching and
//! the storage contract. Nothing in here performs I/O.

pub mod event;
pub mod serde;
pub mod storage;
