//! F.A.Q. repository for database operations.

use sqlx::PgPool;
use validator::Validate;

use super::db_error;
use crate::entities::{InfoEntity, QuestionTypeDb};
use crate::metrics::QueryTimer;
use crate::PersistenceError;
use domain::models::{NewInfo, QuestionType};

const TABLE: &str = "info";

/// Repository for F.A.Q. entries.
#[derive(Clone)]
pub struct InfoRepository {
    pool: PgPool,
}

impl InfoRepository {
    /// Creates a new InfoRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a question with its answer.
    ///
    /// Question text is unique: a duplicate fails with
    /// [`PersistenceError::UniqueViolation`]. Answers may repeat.
    #[tracing::instrument(skip(self, input), fields(question_type = %input.question_type))]
    pub async fn create(&self, input: &NewInfo) -> Result<InfoEntity, PersistenceError> {
        input.validate()?;

        let timer = QueryTimer::new(TABLE, "create");
        let result = sqlx::query_as::<_, InfoEntity>(
            r#"
            INSERT INTO info (question_type, question, answer)
            VALUES ($1, $2, $3)
            RETURNING id, question_type, question, answer
            "#,
        )
        .bind(QuestionTypeDb::from(input.question_type))
        .bind(&input.question)
        .bind(&input.answer)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(TABLE))
    }

    /// Find an entry by identity key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<InfoEntity>, PersistenceError> {
        let timer = QueryTimer::new(TABLE, "find_by_id");
        let result = sqlx::query_as::<_, InfoEntity>(
            r#"
            SELECT id, question_type, question, answer
            FROM info
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(TABLE))
    }

    /// Find an entry by its exact question text.
    pub async fn find_by_question(
        &self,
        question: &str,
    ) -> Result<Option<InfoEntity>, PersistenceError> {
        let timer = QueryTimer::new(TABLE, "find_by_question");
        let result = sqlx::query_as::<_, InfoEntity>(
            r#"
            SELECT id, question_type, question, answer
            FROM info
            WHERE question = $1
            "#,
        )
        .bind(question)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(TABLE))
    }

    /// List the questions of one F.A.Q. section in creation order.
    pub async fn list_by_question_type(
        &self,
        question_type: QuestionType,
    ) -> Result<Vec<InfoEntity>, PersistenceError> {
        let timer = QueryTimer::new(TABLE, "list_by_question_type");
        let result = sqlx::query_as::<_, InfoEntity>(
            r#"
            SELECT id, question_type, question, answer
            FROM info
            WHERE question_type = $1
            ORDER BY id
            "#,
        )
        .bind(QuestionTypeDb::from(question_type))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(TABLE))
    }
}
