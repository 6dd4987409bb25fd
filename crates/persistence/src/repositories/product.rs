//! Product catalogue repository for database operations.

use sqlx::PgPool;
use validator::Validate;

use super::db_error;
use crate::entities::{CategoryTypeEntity, ProductCategoryEntity};
use crate::metrics::QueryTimer;
use crate::PersistenceError;
use domain::models::{NewCategoryType, NewProductCategory};

const CATEGORY_TABLE: &str = "productcategory";
const TYPE_TABLE: &str = "categorytype";

/// Repository for product categories and their category types.
#[derive(Clone)]
pub struct ProductCategoryRepository {
    pool: PgPool,
}

impl ProductCategoryRepository {
    /// Creates a new ProductCategoryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ========================================================================
    // Product categories
    // ========================================================================

    /// Create a product category.
    pub async fn create(
        &self,
        input: &NewProductCategory,
    ) -> Result<ProductCategoryEntity, PersistenceError> {
        input.validate()?;

        let timer = QueryTimer::new(CATEGORY_TABLE, "create");
        let result = sqlx::query_as::<_, ProductCategoryEntity>(
            r#"
            INSERT INTO productcategory (title, response)
            VALUES ($1, $2)
            RETURNING id, title, response
            "#,
        )
        .bind(&input.title)
        .bind(&input.response)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(CATEGORY_TABLE))
    }

    /// Find a product category by identity key.
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<ProductCategoryEntity>, PersistenceError> {
        let timer = QueryTimer::new(CATEGORY_TABLE, "find_by_id");
        let result = sqlx::query_as::<_, ProductCategoryEntity>(
            r#"
            SELECT id, title, response
            FROM productcategory
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(CATEGORY_TABLE))
    }

    /// List all product categories in creation order.
    pub async fn list(&self) -> Result<Vec<ProductCategoryEntity>, PersistenceError> {
        let timer = QueryTimer::new(CATEGORY_TABLE, "list");
        let result = sqlx::query_as::<_, ProductCategoryEntity>(
            r#"
            SELECT id, title, response
            FROM productcategory
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(CATEGORY_TABLE))
    }

    // ========================================================================
    // Category types
    // ========================================================================

    /// Create a category type.
    ///
    /// Fails with [`PersistenceError::ForeignKeyViolation`] when `product_id`
    /// names no existing product category.
    #[tracing::instrument(skip(self, input), fields(product_id = input.product_id))]
    pub async fn create_type(
        &self,
        input: &NewCategoryType,
    ) -> Result<CategoryTypeEntity, PersistenceError> {
        input.validate()?;

        let timer = QueryTimer::new(TYPE_TABLE, "create");
        let result = sqlx::query_as::<_, CategoryTypeEntity>(
            r#"
            INSERT INTO categorytype (name, product_id, url, media)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, product_id, url, media
            "#,
        )
        .bind(&input.name)
        .bind(input.product_id)
        .bind(&input.url)
        .bind(input.media.as_deref())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(TYPE_TABLE))
    }

    /// Find a category type by identity key.
    pub async fn find_type_by_id(
        &self,
        id: i32,
    ) -> Result<Option<CategoryTypeEntity>, PersistenceError> {
        let timer = QueryTimer::new(TYPE_TABLE, "find_by_id");
        let result = sqlx::query_as::<_, CategoryTypeEntity>(
            r#"
            SELECT id, name, product_id, url, media
            FROM categorytype
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(TYPE_TABLE))
    }

    /// List the category types of one product category.
    pub async fn list_types_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<CategoryTypeEntity>, PersistenceError> {
        let timer = QueryTimer::new(TYPE_TABLE, "list_by_product");
        let result = sqlx::query_as::<_, CategoryTypeEntity>(
            r#"
            SELECT id, name, product_id, url, media
            FROM categorytype
            WHERE product_id = $1
            ORDER BY id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result.map_err(db_error(TYPE_TABLE))
    }
}
