//! Login resolver - maps a free-form login string to exactly one user.

use crate::{DbError, Result as DbErrorResult, UserRepository};

use idm_core::{LoginField, User};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

pub struct LoginResolver {
    users: UserRepository,
}

impl LoginResolver {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Find the single user whose email, name or phone equals `login`.
    ///
    /// Each field is queried independently and the matches merged by user
    /// id. Uniqueness is per field, not across fields, so one user's name
    /// may literally equal another user's phone; when that happens the
    /// lookup fails with `AmbiguousLogin` rather than silently picking
    /// one. Matching is exact and case-sensitive. The password is not
    /// checked here.
    pub async fn resolve(&self, login: &str) -> DbErrorResult<User> {
        let mut matched: Vec<User> = Vec::new();

        for field in LoginField::ALL {
            if let Some(user) = self.users.find_by_login_field(field, login).await? {
                // A user matching on several of its own fields is still
                // one identity.
                if !matched.iter().any(|m| m.id == user.id) {
                    matched.push(user);
                }
            }
        }

        match matched.len() {
            0 => Err(DbError::LoginNotFound {
                login: login.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            1 => Ok(matched.remove(0)),
            _ => Err(DbError::AmbiguousLogin {
                login: login.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
