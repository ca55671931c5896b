use thiserror::Error;

use crate::event::{EventId, UserId};

/// Errors that can occur during event store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The user has never created an event.
    #[error("no such user: {user_id}")]
    NoSuchUser { user_id: UserId },
    /// The user exists but has no event with this id.
    #[error("no such event {event_id} for user {user_id}")]
    NoSuchEvent { user_id: UserId, event_id: EventId },
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
