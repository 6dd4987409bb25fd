//! Domain layer for the support bot backend.
//!
//! This crate contains:
//! - Domain models (User, ProductCategory, CategoryType, Info, ContactManager, ...)
//! - Closed enumerations with their stored codes (Role, QuestionType)
//! - Validated input types for creating records
//! - Domain error types

pub mod errors;
pub mod models;

pub use errors::DomainError;
