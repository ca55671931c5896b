//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NoSuchUser` -> 404 (Not Found)
/// - `NoSuchEvent` -> 404 (Not Found)
///
/// # Examples
///
/// ```
/// use eventcal_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NoSuchUser { user_id: 7 };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NoSuchUser { .. } => 404,
        RepositoryError::NoSuchEvent { .. } => 404,
    }
}
