//! Error handling utilities for stores

use social_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "channel message not found" error
pub fn message_not_found(id: i64) -> DomainError {
    DomainError::MessageNotFound(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_database_error() {
        let err = map_db_error(SqlxError::RowNotFound);
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }

    #[test]
    fn test_message_not_found() {
        assert!(message_not_found(5).is_not_found());
    }
}
