//! Contact request repository for database operations.

use shared::pagination::{clamp_limit, Cursor};
use sqlx::PgPool;
use validator::Validate;

use super::{db_error, insert_statement};
use crate::entities::ContactManagerEntity;
use crate::metrics::QueryTimer;
use crate::PersistenceError;
use domain::models::NewContactManager;

const TABLE: &str = "contactmanager";
const COLUMNS: &str =
    "id, first_name, phone_number, need_support, need_contact_with_manager, shipping_date";

/// One page of contact requests, newest first.
#[derive(Debug, Clone)]
pub struct ContactRequestPage {
    pub items: Vec<ContactManagerEntity>,
    /// Cursor of the last item when more rows may follow.
    pub next_cursor: Option<Cursor>,
}

/// Repository for manager contact requests.
#[derive(Clone)]
pub struct ContactManagerRepository {
    pool: PgPool,
}

impl ContactManagerRepository {
    /// Creates a new ContactManagerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Submit a contact request.
    ///
    /// Flags left unset and `shipping_date` take their database defaults.
    #[tracing::instrument(skip(self, input))]
    pub async fn create(
        &self,
        input: &NewContactManager,
    ) -> Result<ContactManagerEntity, PersistenceError> {
        input.validate()?;

        let mut columns = vec!["first_name", "phone_number"];
        if input.need_support.is_some() {
            columns.push("need_support");
        }
        if input.need_contact_with_manager.is_some() {
            columns.push("need_contact_with_manager");
        }
        let sql = insert_statement(TABLE, &columns, COLUMNS);

        let timer = QueryTimer::new(TABLE, "create");
        let mut query = sqlx::query_as::<_, ContactManagerEntity>(&sql)
            .bind(&input.first_name)
            .bind(&input.phone_number);
        if let Some(need_support) = input.need_support {
            query = query.bind(need_support);
        }
        if let Some(need_contact) = input.need_contact_with_manager {
            query = query.bind(need_contact);
        }
        let result = query.fetch_one(&self.pool).await;
        timer.record();

        let request = result.map_err(db_error(TABLE))?;
        tracing::info!(
            request_id = request.id,
            need_support = request.need_support,
            need_contact_with_manager = request.need_contact_with_manager,
            "Contact request submitted"
        );
        Ok(request)
    }

    /// Find a contact request by identity key.
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<ContactManagerEntity>, PersistenceError> {
        let timer = QueryTimer::new(TABLE, "find_by_id");
        let result = sqlx::query_as::<_, ContactManagerEntity>(
            r#"
            SELECT id, first_name, phone_number, need_support, need_contact_with_manager, shipping_date
            FROM contactmanager
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(TABLE))
    }

    /// List contact requests newest first, starting after `after`.
    pub async fn list_recent(
        &self,
        limit: Option<i64>,
        after: Option<Cursor>,
    ) -> Result<ContactRequestPage, PersistenceError> {
        let limit = clamp_limit(limit);

        let timer = QueryTimer::new(TABLE, "list_recent");
        // One extra row tells whether another page exists
        let result = sqlx::query_as::<_, ContactManagerEntity>(
            r#"
            SELECT id, first_name, phone_number, need_support, need_contact_with_manager, shipping_date
            FROM contactmanager
            WHERE $1::timestamptz IS NULL OR (shipping_date, id) < ($1, $2)
            ORDER BY shipping_date DESC, id DESC
            LIMIT $3
            "#,
        )
        .bind(after.map(|c| c.timestamp))
        .bind(after.map(|c| c.id))
        .bind(limit + 1)
        .fetch_all(&self.pool)
        .await;
        timer.record();

        let mut items = result.map_err(db_error(TABLE))?;
        let has_more = items.len() as i64 > limit;
        items.truncate(limit as usize);
        let next_cursor = if has_more {
            items
                .last()
                .map(|last| Cursor::new(last.shipping_date, last.id))
        } else {
            None
        };

        Ok(ContactRequestPage { items, next_cursor })
    }
}
