//! Integration tests for product categories and category types.

mod common;

use common::test_pool;
use domain::models::{CategoryType, NewCategoryType, NewProductCategory, ProductCategory};
use persistence::repositories::ProductCategoryRepository;
use persistence::PersistenceError;

fn new_category() -> NewProductCategory {
    NewProductCategory {
        title: "Разработка Telegram-ботов".to_string(),
        response: "Выберите тип бота, который вас интересует.".to_string(),
    }
}

fn new_type(product_id: i32, media: Option<&str>) -> NewCategoryType {
    NewCategoryType {
        name: "Бот для записи клиентов".to_string(),
        product_id,
        url: "https://example.com/bots/booking".to_string(),
        media: media.map(str::to_string),
    }
}

#[tokio::test]
async fn test_product_category_round_trip() {
    let Some(pool) = test_pool().await else { return };
    let repo = ProductCategoryRepository::new(pool);

    let created: ProductCategory = repo.create(&new_category()).await.unwrap().into();
    let loaded: ProductCategory = repo.find_by_id(created.id).await.unwrap().unwrap().into();

    assert_eq!(loaded, created);
    assert_eq!(loaded.title, "Разработка Telegram-ботов");

    let all = repo.list().await.unwrap();
    assert!(all.iter().any(|c| c.id == created.id));
}

#[tokio::test]
async fn test_category_type_round_trip() {
    let Some(pool) = test_pool().await else { return };
    let repo = ProductCategoryRepository::new(pool);

    let category = repo.create(&new_category()).await.unwrap();
    let created: CategoryType = repo
        .create_type(&new_type(category.id, Some("AgACAgIAAxkBAAIB")))
        .await
        .unwrap()
        .into();
    let loaded: CategoryType = repo
        .find_type_by_id(created.id)
        .await
        .unwrap()
        .unwrap()
        .into();

    assert_eq!(loaded, created);
    assert_eq!(loaded.product_id, category.id);
    assert_eq!(loaded.media.as_deref(), Some("AgACAgIAAxkBAAIB"));
}

#[tokio::test]
async fn test_category_type_media_is_optional() {
    let Some(pool) = test_pool().await else { return };
    let repo = ProductCategoryRepository::new(pool);

    let category = repo.create(&new_category()).await.unwrap();
    let created = repo.create_type(&new_type(category.id, None)).await.unwrap();

    assert!(created.media.is_none());
}

#[tokio::test]
async fn test_many_types_per_category() {
    let Some(pool) = test_pool().await else { return };
    let repo = ProductCategoryRepository::new(pool);

    let category = repo.create(&new_category()).await.unwrap();
    let other = repo.create(&new_category()).await.unwrap();
    let first = repo.create_type(&new_type(category.id, None)).await.unwrap();
    let second = repo.create_type(&new_type(category.id, None)).await.unwrap();
    repo.create_type(&new_type(other.id, None)).await.unwrap();

    let types = repo.list_types_by_product(category.id).await.unwrap();
    let ids: Vec<i32> = types.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_category_type_unknown_product_is_foreign_key_violation() {
    let Some(pool) = test_pool().await else { return };
    let repo = ProductCategoryRepository::new(pool);

    let err = repo.create_type(&new_type(-1, None)).await.unwrap_err();

    assert!(err.is_foreign_key_violation(), "unexpected error: {err:?}");
    assert_eq!(err.constraint(), Some("categorytype_product_id_fkey"));
}

#[tokio::test]
async fn test_product_category_delete_is_restricted() {
    let Some(pool) = test_pool().await else { return };
    let repo = ProductCategoryRepository::new(pool.clone());

    let category = repo.create(&new_category()).await.unwrap();
    repo.create_type(&new_type(category.id, None)).await.unwrap();

    let err = sqlx::query("DELETE FROM productcategory WHERE id = $1")
        .bind(category.id)
        .execute(&pool)
        .await
        .map_err(PersistenceError::from)
        .unwrap_err();

    assert!(err.is_foreign_key_violation(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_missing_category_type_name_is_missing_value() {
    let Some(pool) = test_pool().await else { return };
    let repo = ProductCategoryRepository::new(pool.clone());

    let category = repo.create(&new_category()).await.unwrap();
    let err = sqlx::query("INSERT INTO categorytype (product_id, url) VALUES ($1, $2)")
        .bind(category.id)
        .bind("https://example.com")
        .execute(&pool)
        .await
        .map_err(PersistenceError::from)
        .unwrap_err();

    match err {
        PersistenceError::MissingValue { column, .. } => assert_eq!(column, "name"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_blank_title_round_trip() {
    let Some(pool) = test_pool().await else { return };
    let repo = ProductCategoryRepository::new(pool);

    let input = NewProductCategory {
        title: "   ".to_string(),
        response: String::new(),
    };
    let created: ProductCategory = repo.create(&input).await.unwrap().into();
    let loaded: ProductCategory = repo.find_by_id(created.id).await.unwrap().unwrap().into();

    assert_eq!(loaded, created);
    assert_eq!(loaded.title, "   ");
}

#[tokio::test]
async fn test_overlong_title_rejected_before_insert() {
    let Some(pool) = test_pool().await else { return };
    let repo = ProductCategoryRepository::new(pool);

    let input = NewProductCategory {
        title: "x".repeat(151),
        response: String::new(),
    };
    let err = repo.create(&input).await.unwrap_err();

    assert!(matches!(err, PersistenceError::Validation(_)));
}

#[tokio::test]
async fn test_overlong_value_rejected_by_database() {
    let Some(pool) = test_pool().await else { return };

    let err = sqlx::query("INSERT INTO productcategory (title, response) VALUES ($1, '')")
        .bind("x".repeat(151))
        .execute(&pool)
        .await
        .map_err(PersistenceError::from)
        .unwrap_err();

    assert!(matches!(err, PersistenceError::ValueTooLong(_)));
}
