//! Manager contact request domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Entity;

/// A request left by a user who wants to be contacted.
///
/// Requests are never modified after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactManager {
    pub id: i32,
    pub first_name: String,
    pub phone_number: String,
    pub need_support: bool,
    pub need_contact_with_manager: bool,
    /// When the request was submitted, assigned by the database.
    pub shipping_date: DateTime<Utc>,
}

impl Entity for ContactManager {
    const TABLE: &'static str = "contactmanager";

    fn id(&self) -> i32 {
        self.id
    }
}

/// Input for submitting a contact request.
///
/// Flags left as `None` take the column default (`false`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewContactManager {
    #[validate(length(max = 32, message = "First name must be at most 32 characters"))]
    pub first_name: String,

    #[validate(length(max = 25, message = "Phone number must be at most 25 characters"))]
    pub phone_number: String,

    #[serde(default)]
    pub need_support: Option<bool>,

    #[serde(default)]
    pub need_contact_with_manager: Option<bool>,
}

impl NewContactManager {
    pub fn new(first_name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            phone_number: phone_number.into(),
            need_support: None,
            need_contact_with_manager: None,
        }
    }
}
