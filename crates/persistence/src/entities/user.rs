//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Role;
use sqlx::FromRow;

/// Database enum for role_enum. Variants map to the stored single-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "role_enum")]
pub enum RoleDb {
    #[sqlx(rename = "U")]
    User,
    #[sqlx(rename = "A")]
    Admin,
    #[sqlx(rename = "M")]
    Manager,
}

impl From<RoleDb> for Role {
    fn from(db: RoleDb) -> Self {
        match db {
            RoleDb::User => Role::User,
            RoleDb::Admin => Role::Admin,
            RoleDb::Manager => Role::Manager,
        }
    }
}

impl From<Role> for RoleDb {
    fn from(role: Role) -> Self {
        match role {
            Role::User => RoleDb::User,
            Role::Admin => RoleDb::Admin,
            Role::Manager => RoleDb::Manager,
        }
    }
}

/// Database row mapping for the "user" table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: i32,
    pub tg_id: i64,
    pub role: RoleDb,
    pub join_date: DateTime<Utc>,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            tg_id: entity.tg_id,
            role: entity.role.into(),
            join_date: entity.join_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_conversion() {
        for role in Role::ALL {
            assert_eq!(Role::from(RoleDb::from(role)), role);
        }
        assert_eq!(RoleDb::from(Role::Manager), RoleDb::Manager);
    }

    #[test]
    fn test_user_entity_to_domain() {
        let entity = UserEntity {
            id: 7,
            tg_id: 5_000_000_001,
            role: RoleDb::Admin,
            join_date: Utc::now(),
        };
        let user: domain::models::User = entity.clone().into();
        assert_eq!(user.id, 7);
        assert_eq!(user.tg_id, 5_000_000_001);
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.join_date, entity.join_date);
    }
}
