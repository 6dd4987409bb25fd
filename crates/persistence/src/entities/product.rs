//! Product catalogue entities (database row mappings).

use sqlx::FromRow;

/// Database row mapping for the productcategory table.
#[derive(Debug, Clone, FromRow)]
pub struct ProductCategoryEntity {
    pub id: i32,
    pub title: String,
    pub response: String,
}

impl From<ProductCategoryEntity> for domain::models::ProductCategory {
    fn from(entity: ProductCategoryEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            response: entity.response,
        }
    }
}

/// Database row mapping for the categorytype table.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryTypeEntity {
    pub id: i32,
    pub name: String,
    pub product_id: i32,
    pub url: String,
    pub media: Option<String>,
}

impl From<CategoryTypeEntity> for domain::models::CategoryType {
    fn from(entity: CategoryTypeEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            product_id: entity.product_id,
            url: entity.url,
            media: entity.media,
        }
    }
}
