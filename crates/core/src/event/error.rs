use thiserror::Error;

/// Errors raised when an event request breaks a business rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("user_id is required")]
    MissingUserId,
    #[error("text is required")]
    EmptyText,
    #[error("date is required")]
    MissingDate,
    #[error("date must be a date in the future")]
    DateNotInFuture,
}
