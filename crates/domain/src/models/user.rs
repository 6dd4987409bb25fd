//! Bot user domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use super::Entity;
use crate::DomainError;

/// Access role of a bot user.
///
/// Stored as a single-letter code; existing rows depend on these exact codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "U")]
    User,
    #[serde(rename = "A")]
    Admin,
    #[serde(rename = "M")]
    Manager,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Admin, Role::Manager];

    /// Stored code of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "U",
            Role::Admin => "A",
            Role::Manager => "M",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Role::User),
            "A" => Ok(Role::Admin),
            "M" => Ok(Role::Manager),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Telegram user known to the bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub tg_id: i64,
    pub role: Role,
    pub join_date: DateTime<Utc>,
}

impl Entity for User {
    const TABLE: &'static str = "user";

    fn id(&self) -> i32 {
        self.id
    }
}

/// Input for registering a user.
///
/// `join_date` is always assigned by the database. When `role` is `None`
/// the column default applies.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewUser {
    pub tg_id: i64,
    pub role: Option<Role>,
}

impl NewUser {
    pub fn new(tg_id: i64) -> Self {
        Self { tg_id, role: None }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}
