//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Errors propagate to the immediate caller unmodified; there is no retry or
/// recovery at this layer.
#[derive(Debug, Error)]
pub enum DomainError {
    // Not Found
    #[error("Channel message not found: {0}")]
    MessageNotFound(i64),

    // Validation
    #[error("channel message id is not set")]
    MessageIdNotSet,

    #[error("Validation error: {0}")]
    ValidationError(String),

    // Infrastructure (wrapped)
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::MessageIdNotSet => "MESSAGE_ID_NOT_SET",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MessageNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MessageIdNotSet | Self::ValidationError(_))
    }
}
