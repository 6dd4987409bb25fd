//! Domain models for the support bot.

pub mod company;
pub mod contact_manager;
pub mod info;
pub mod product;
pub mod user;

pub use company::{
    CheckCompanyPortfolio, InformationAboutCompany, NewCheckCompanyPortfolio,
    NewInformationAboutCompany,
};
pub use contact_manager::{ContactManager, NewContactManager};
pub use info::{Info, NewInfo, QuestionType};
pub use product::{CategoryType, NewCategoryType, NewProductCategory, ProductCategory};
pub use user::{NewUser, Role, User};

/// Common base of every stored record: one table and a synthetic integer id.
pub trait Entity {
    /// Name of the backing table.
    const TABLE: &'static str;

    /// Identity key assigned by the database on insert.
    fn id(&self) -> i32;
}

/// Tables of every entity, in creation order.
pub const ALL_TABLES: [&str; 7] = [
    User::TABLE,
    ProductCategory::TABLE,
    CategoryType::TABLE,
    InformationAboutCompany::TABLE,
    CheckCompanyPortfolio::TABLE,
    Info::TABLE,
    ContactManager::TABLE,
];
