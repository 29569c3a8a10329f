use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Display, Default)]
pub enum Role {
    #[default]
    #[serde(rename = "user")]
    #[display("user")]
    User,
    #[serde(rename = "admin")]
    #[display("admin")]
    Admin,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Public user shape. The password hash never leaves the repo layer
/// embedded in this struct, so it cannot leak into a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Internal record carrying the stored credential hash, only used for login.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub password_hash: String,
}

pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub role: Role,
}

/// PUT /users body. Only supplied columns are written; `phone` distinguishes
/// omitted from explicit null.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Plaintext; hashed by the api layer before it reaches the repo.
    pub password: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub phone: Option<Option<String>>,
    pub role: Option<Role>,
}

impl UserUpdate {
    pub fn has_updates(&self) -> bool {
        self.name.is_some()
            || self.email.is_some()
            || self.password.is_some()
            || self.phone.is_some()
            || self.role.is_some()
    }
}

/// Column values actually written by the repo (password already hashed).
#[derive(Debug, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub phone: Option<Option<String>>,
    pub role: Option<Role>,
}
