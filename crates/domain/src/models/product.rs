//! Product and service catalogue domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Entity;

/// Top-level product or service category shown in the bot menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: i32,
    pub title: String,
    /// Message sent back when the category is selected.
    pub response: String,
}

impl Entity for ProductCategory {
    const TABLE: &'static str = "productcategory";

    fn id(&self) -> i32 {
        self.id
    }
}

/// A concrete offering inside a product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryType {
    pub id: i32,
    pub name: String,
    pub product_id: i32,
    pub url: String,
    pub media: Option<String>,
}

impl Entity for CategoryType {
    const TABLE: &'static str = "categorytype";

    fn id(&self) -> i32 {
        self.id
    }
}

/// Input for creating a product category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProductCategory {
    #[validate(length(max = 150, message = "Title must be at most 150 characters"))]
    pub title: String,

    pub response: String,
}

/// Input for creating a category type under an existing product category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCategoryType {
    #[validate(length(max = 150, message = "Name must be at most 150 characters"))]
    pub name: String,

    pub product_id: i32,

    #[validate(length(max = 128, message = "URL must be at most 128 characters"))]
    pub url: String,

    #[validate(length(max = 128, message = "Media reference must be at most 128 characters"))]
    pub media: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;

    fn category_type(name: &str, url: &str, media: Option<&str>) -> NewCategoryType {
        NewCategoryType {
            name: name.to_string(),
            product_id: 1,
            url: url.to_string(),
            media: media.map(str::to_string),
        }
    }

    #[test]
    fn test_new_product_category_valid() {
        let input = NewProductCategory {
            title: "Разработка ботов".to_string(),
            response: Sentence(3..10).fake(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_new_product_category_title_limit_counts_characters() {
        // 150 Cyrillic characters are 300 bytes but still fit VARCHAR(150)
        let input = NewProductCategory {
            title: "Я".repeat(150),
            response: String::new(),
        };
        assert!(input.validate().is_ok());

        let too_long = NewProductCategory {
            title: "Я".repeat(151),
            response: String::new(),
        };
        let errors = too_long.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_new_product_category_blank_title_allowed() {
        let input = NewProductCategory {
            title: "  ".to_string(),
            response: "text".to_string(),
        };
        assert!(input.validate().is_ok());

        let blank_type = category_type(" ", "https://example.com", None);
        assert!(blank_type.validate().is_ok());
    }

    #[test]
    fn test_new_category_type_valid() {
        let input = category_type("Чат-боты", "https://example.com/bots", Some("AgADBAAD"));
        assert!(input.validate().is_ok());

        let without_media = category_type("Чат-боты", "https://example.com/bots", None);
        assert!(without_media.validate().is_ok());
    }

    #[test]
    fn test_new_category_type_url_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(128));
        let errors = category_type("Name", &url, None).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_new_category_type_media_too_long() {
        let media = "m".repeat(129);
        let errors = category_type("Name", "https://example.com", Some(&media))
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("media"));
    }

    #[test]
    fn test_entity_tables() {
        assert_eq!(ProductCategory::TABLE, "productcategory");
        assert_eq!(CategoryType::TABLE, "categorytype");
    }
}
