//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod company;
pub mod contact_manager;
pub mod info;
pub mod product;
pub mod user;

pub use company::{CheckCompanyPortfolioEntity, InformationAboutCompanyEntity};
pub use contact_manager::ContactManagerEntity;
pub use info::{InfoEntity, QuestionTypeDb};
pub use product::{CategoryTypeEntity, ProductCategoryEntity};
pub use user::{RoleDb, UserEntity};
