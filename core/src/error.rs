//! Error taxonomy for booking and catalog operations.

use thiserror::Error;

/// Result type alias for booking operations.
pub type Result<T> = std::result::Result<T, BookingError>;

/// Failure modes of the booking service, organized by who is at fault.
///
/// The HTTP layer maps each variant to exactly one status code; nothing in
/// this crate knows about HTTP. `Storage` carries the underlying driver
/// message for server-side logging and is never shown verbatim to clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Missing or invalid credential.
    #[error("Authentication required")]
    Unauthorized,

    /// Authenticated, but not permitted to perform this action on this
    /// resource.
    #[error("Not authorized for this resource")]
    Forbidden,

    /// The named entity does not exist.
    #[error("{entity} not found")]
    NotFound {
        /// Entity kind, e.g. "Package" or "Booking".
        entity: &'static str,
    },

    /// The request is well-formed but semantically invalid.
    #[error("{message}")]
    InvalidArgument {
        /// Human-readable description of what was rejected.
        message: String,
    },

    /// Underlying store failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BookingError {
    /// Shorthand for a [`BookingError::NotFound`] with the given entity kind.
    #[must_use]
    pub const fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Shorthand for an [`BookingError::InvalidArgument`] with the given message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
