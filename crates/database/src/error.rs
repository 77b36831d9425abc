//! Database error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Which integrity rule the store rejected a write for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Duplicate value in a unique column.
    Unique,
    /// Reference to a row that does not exist.
    ForeignKey,
    /// A `CHECK` rule failed.
    Check,
    /// A required column was NULL.
    NotNull,
}

/// Errors that can occur during database operations.
///
/// Raw `sqlx::Error` values are classified once, in the `From` impl, so callers
/// match on this closed set instead of inspecting driver messages.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Unclassified SQLx error (connection, query, decode, etc.)
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Record not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Record already exists
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: String },

    /// The store rejected a write on an integrity rule.
    #[error("constraint violation ({kind:?}): {message}")]
    Constraint { kind: ConstraintKind, message: String },

    /// No pooled connection became available within the acquire timeout.
    #[error("timed out waiting for a database connection")]
    PoolTimeout,

    /// A field failed validation before reaching the store.
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),
}

impl DatabaseError {
    /// Whether this error is a duplicate-value or bad-reference rejection.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::Constraint { .. } | DatabaseError::AlreadyExists { .. }
        )
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        let classified = match &err {
            sqlx::Error::PoolTimedOut => return DatabaseError::PoolTimeout,
            sqlx::Error::Database(db_err) => {
                let kind = match db_err.kind() {
                    sqlx::error::ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                    sqlx::error::ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                    sqlx::error::ErrorKind::CheckViolation => Some(ConstraintKind::Check),
                    sqlx::error::ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                    _ => None,
                };
                kind.map(|kind| (kind, db_err.message().to_string()))
            }
            _ => None,
        };

        match classified {
            Some((kind, message)) => DatabaseError::Constraint { kind, message },
            None => DatabaseError::Sqlx(err),
        }
    }
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_classified() {
        let err = DatabaseError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DatabaseError::PoolTimeout));
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn test_row_not_found_stays_unclassified() {
        let err = DatabaseError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DatabaseError::Sqlx(_)));
    }

    #[test]
    fn test_already_exists_counts_as_constraint() {
        let err = DatabaseError::AlreadyExists {
            entity: "User",
            id: "alice".to_string(),
        };
        assert!(err.is_constraint_violation());
        assert_eq!(err.to_string(), "User already exists: alice");
    }
}
