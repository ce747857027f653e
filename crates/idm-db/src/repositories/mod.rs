pub mod login_resolver;
pub mod user_repository;

use crate::{DbError, Result as DbErrorResult};

use idm_core::User;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::FromRow;
use uuid::Uuid;

/// Raw `users` row. Runtime queries deserialize into this and then convert
/// into the domain model, surfacing corrupt rows as `InvalidRecord`.
#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub password_hash: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl UserRow {
    #[track_caller]
    pub(crate) fn into_user(self) -> DbErrorResult<User> {
        Ok(User {
            id: Uuid::parse_str(&self.id).map_err(|e| DbError::InvalidRecord {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            email: self.email,
            name: self.name,
            phone: self.phone,
            password_hash: self.password_hash,
            created_at: DateTime::from_timestamp(self.created_at, 0).ok_or_else(|| {
                DbError::InvalidRecord {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(self.updated_at, 0).ok_or_else(|| {
                DbError::InvalidRecord {
                    message: "Invalid timestamp in users.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}
