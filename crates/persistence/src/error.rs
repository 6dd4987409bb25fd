//! Persistence error types.
//!
//! Constraint violations are detected by PostgreSQL and surfaced unchanged:
//! the underlying [`sqlx::Error`] is kept as the error source.

use sqlx::postgres::PgDatabaseError;
use thiserror::Error;

/// SQLSTATE codes the persistence layer distinguishes.
pub mod sqlstate {
    pub const UNIQUE_VIOLATION: &str = "23505";
    pub const NOT_NULL_VIOLATION: &str = "23502";
    pub const FOREIGN_KEY_VIOLATION: &str = "23503";
    pub const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";
}

/// Kind of failure reported by the database for a SQLSTATE code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    NotNull,
    ForeignKey,
    ValueTooLong,
    Other,
}

impl ConstraintKind {
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some(sqlstate::UNIQUE_VIOLATION) => Self::Unique,
            Some(sqlstate::NOT_NULL_VIOLATION) => Self::NotNull,
            Some(sqlstate::FOREIGN_KEY_VIOLATION) => Self::ForeignKey,
            Some(sqlstate::STRING_DATA_RIGHT_TRUNCATION) => Self::ValueTooLong,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation {
        constraint: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Required value missing: {column}")]
    MissingValue {
        column: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Referenced row does not exist: {constraint}")]
    ForeignKeyViolation {
        constraint: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Value too long for column")]
    ValueTooLong(#[source] sqlx::Error),

    #[error("Record not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl PersistenceError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }

    pub fn is_missing_value(&self) -> bool {
        matches!(self, Self::MissingValue { .. })
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, Self::ForeignKeyViolation { .. })
    }

    /// Name of the violated constraint, when the database reported one.
    pub fn constraint(&self) -> Option<&str> {
        match self {
            Self::UniqueViolation { constraint, .. }
            | Self::ForeignKeyViolation { constraint, .. } => Some(constraint),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        let db_err = match err {
            sqlx::Error::RowNotFound => return Self::NotFound,
            sqlx::Error::Database(db_err) => db_err,
            other => return Self::Database(other),
        };

        let kind = ConstraintKind::from_code(db_err.code().as_deref());
        let constraint = db_err.constraint().unwrap_or_default().to_string();
        let column = db_err
            .try_downcast_ref::<PgDatabaseError>()
            .and_then(|pg| pg.column())
            .unwrap_or_default()
            .to_string();
        let source = sqlx::Error::Database(db_err);

        match kind {
            ConstraintKind::Unique => Self::UniqueViolation { constraint, source },
            ConstraintKind::NotNull => Self::MissingValue { column, source },
            ConstraintKind::ForeignKey => Self::ForeignKeyViolation { constraint, source },
            ConstraintKind::ValueTooLong => Self::ValueTooLong(source),
            ConstraintKind::Other => Self::Database(source),
        }
    }
}
