use thiserror::Error;

use crate::dto::integrity::TotalDrift;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Stored totals disagree with the award ledger for {} candidate(s)", .0.len())]
    Consistency(Vec<TotalDrift>),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn total_overflow() -> Self {
        Self::Validation("award would overflow the candidate total".to_string())
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// `numeric_value_out_of_range`, raised when a BIGINT total would overflow
    pub fn is_numeric_overflow(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("22003")
        )
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(error: sqlx::Error) -> Self {
        let unavailable = matches!(
            error,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
        );

        if unavailable {
            Self::Unavailable(error.to_string())
        } else {
            Self::Database(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct PgCode(&'static str);

    impl fmt::Display for PgCode {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "postgres error {}", self.0)
        }
    }

    impl std::error::Error for PgCode {}

    impl sqlx::error::DatabaseError for PgCode {
        fn message(&self) -> &str {
            "postgres error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }
    }

    fn pg_error(code: &'static str) -> StorageError {
        StorageError::from(sqlx::Error::Database(Box::new(PgCode(code))))
    }

    #[test]
    fn test_sqlstate_classification() {
        assert!(pg_error("22003").is_numeric_overflow());
        assert!(pg_error("23505").is_unique_violation());
        assert!(pg_error("23503").is_foreign_key_violation());
        assert!(!pg_error("23505").is_numeric_overflow());
    }

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let error = StorageError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(error, StorageError::Unavailable(_)));
    }

    #[test]
    fn test_row_not_found_stays_database_error() {
        let error = StorageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(error, StorageError::Database(_)));
        assert!(!error.is_unique_violation());
    }

    #[test]
    fn test_consistency_message_counts_candidates() {
        let drift = TotalDrift {
            candidate_id: uuid::Uuid::nil(),
            stored_total: 5,
            ledger_total: 3,
        };
        let error = StorageError::Consistency(vec![drift]);
        assert_eq!(
            error.to_string(),
            "Stored totals disagree with the award ledger for 1 candidate(s)"
        );
    }
}
