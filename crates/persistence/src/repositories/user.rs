//! User repository for database operations.

use sqlx::PgPool;
use validator::Validate;

use super::{db_error, insert_statement};
use crate::entities::{RoleDb, UserEntity};
use crate::metrics::QueryTimer;
use crate::PersistenceError;
use domain::models::{NewUser, Role};

const TABLE: &str = "user";
const COLUMNS: &str = "id, tg_id, role, join_date";

/// Repository for bot user database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a user.
    ///
    /// Fails with [`PersistenceError::UniqueViolation`] when the Telegram id is
    /// already registered. Role defaults to `U` in the database when omitted.
    #[tracing::instrument(skip(self, input), fields(tg_id = input.tg_id))]
    pub async fn create(&self, input: &NewUser) -> Result<UserEntity, PersistenceError> {
        input.validate()?;

        let mut columns = vec!["tg_id"];
        if input.role.is_some() {
            columns.push("role");
        }
        let sql = insert_statement("\"user\"", &columns, COLUMNS);

        let timer = QueryTimer::new(TABLE, "create");
        let mut query = sqlx::query_as::<_, UserEntity>(&sql).bind(input.tg_id);
        if let Some(role) = input.role {
            query = query.bind(RoleDb::from(role));
        }
        let result = query.fetch_one(&self.pool).await;
        timer.record();

        let user = result.map_err(db_error(TABLE))?;
        tracing::info!(user_id = user.id, role = ?user.role, "User registered");
        Ok(user)
    }

    /// Find a user by identity key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<UserEntity>, PersistenceError> {
        let timer = QueryTimer::new(TABLE, "find_by_id");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, tg_id, role, join_date
            FROM "user"
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(TABLE))
    }

    /// Find a user by Telegram id.
    pub async fn find_by_tg_id(&self, tg_id: i64) -> Result<Option<UserEntity>, PersistenceError> {
        let timer = QueryTimer::new(TABLE, "find_by_tg_id");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, tg_id, role, join_date
            FROM "user"
            WHERE tg_id = $1
            "#,
        )
        .bind(tg_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(TABLE))
    }

    /// List users with the given role, oldest first.
    pub async fn list_by_role(&self, role: Role) -> Result<Vec<UserEntity>, PersistenceError> {
        let timer = QueryTimer::new(TABLE, "list_by_role");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, tg_id, role, join_date
            FROM "user"
            WHERE role = $1
            ORDER BY join_date, id
            "#,
        )
        .bind(RoleDb::from(role))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(TABLE))
    }

    /// Count registered users.
    pub async fn count(&self) -> Result<i64, PersistenceError> {
        let timer = QueryTimer::new(TABLE, "count");
        let result = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "user""#)
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result.map_err(db_error(TABLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_insert_statement_without_role() {
        let sql = insert_statement("\"user\"", &["tg_id"], COLUMNS);
        assert!(sql.starts_with("INSERT INTO \"user\" (tg_id) VALUES ($1)"));
        assert!(sql.ends_with("RETURNING id, tg_id, role, join_date"));
    }
}
