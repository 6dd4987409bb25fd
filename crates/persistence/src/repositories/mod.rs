//! Repository implementations for database operations.
//!
//! Repositories only insert and read; the schema defines no updates or deletes.

pub mod company;
pub mod contact_manager;
pub mod info;
pub mod product;
pub mod user;

pub use company::CompanyRepository;
pub use contact_manager::{ContactManagerRepository, ContactRequestPage};
pub use info::InfoRepository;
pub use product::ProductCategoryRepository;
pub use user::UserRepository;

use crate::metrics::record_constraint_violation;
use crate::PersistenceError;

/// Builds an INSERT for the given columns, binding them as `$1..$n`.
///
/// Columns left out take their database default.
pub(crate) fn insert_statement(table: &str, columns: &[&str], returning: &str) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        table,
        columns.join(", "),
        placeholders.join(", "),
        returning
    )
}

/// Converts a sqlx error for `table`, counting constraint violations.
pub(crate) fn db_error(table: &'static str) -> impl Fn(sqlx::Error) -> PersistenceError {
    move |err| {
        let err = PersistenceError::from(err);
        record_constraint_violation(table, &err);
        tracing::debug!(table, error = %err, "query rejected by database");
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_statement_numbers_placeholders() {
        let sql = insert_statement(
            "contactmanager",
            &["first_name", "phone_number", "need_support"],
            "id",
        );
        assert_eq!(
            sql,
            "INSERT INTO contactmanager (first_name, phone_number, need_support) \
             VALUES ($1, $2, $3) RETURNING id"
        );
    }

    #[test]
    fn test_insert_statement_single_column() {
        let sql = insert_statement("\"user\"", &["tg_id"], "id, tg_id");
        assert_eq!(
            sql,
            "INSERT INTO \"user\" (tg_id) VALUES ($1) RETURNING id, tg_id"
        );
    }

    #[test]
    fn test_db_error_keeps_classification() {
        let convert = db_error("info");
        let err = convert(sqlx::Error::RowNotFound);
        assert!(matches!(err, PersistenceError::NotFound));
    }
}
