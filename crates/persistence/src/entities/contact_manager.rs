//! Contact request entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the contactmanager table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactManagerEntity {
    pub id: i32,
    pub first_name: String,
    pub phone_number: String,
    pub need_support: bool,
    pub need_contact_with_manager: bool,
    pub shipping_date: DateTime<Utc>,
}

impl From<ContactManagerEntity> for domain::models::ContactManager {
    fn from(entity: ContactManagerEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            phone_number: entity.phone_number,
            need_support: entity.need_support,
            need_contact_with_manager: entity.need_contact_with_manager,
            shipping_date: entity.shipping_date,
        }
    }
}
