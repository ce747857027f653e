//! User repository - the durable identity store.
//!
//! Each login handle (email, name, phone) is globally unique among users
//! where present. The invariant is enforced by partial UNIQUE indexes, so
//! a create or edit that would collide fails inside the INSERT/UPDATE
//! itself and never as a check-then-write race. A failed write leaves the
//! store unchanged: creates are a single INSERT, edits a single UPDATE.

use crate::repositories::UserRow;
use crate::{DbError, Result as DbErrorResult};

use idm_core::{LoginField, NewUser, User, UserPatch};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

const SELECT_COLUMNS: &str = "id, email, name, phone, password_hash, created_at, updated_at";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a user, assigning a fresh id.
    ///
    /// Fails with `LoginOccupied` (naming the colliding field) when any
    /// provided handle is already held by another user.
    pub async fn create(&self, input: &NewUser) -> DbErrorResult<Uuid> {
        if input.password_hash.is_empty() {
            return Err(DbError::EmptyPasswordHash {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if input.login_handles().is_empty() {
            return Err(DbError::NoLoginHandle {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let id = Uuid::new_v4();
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (id, email, name, phone, password_hash, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&input.email)
        .bind(&input.name)
        .bind(&input.phone)
        .bind(&input.password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(id)
    }

    /// Apply a field-level patch to an existing user.
    ///
    /// Only patched fields are written. The row is merged and written in
    /// one UPDATE inside a transaction, so a collision on any patched
    /// handle leaves every field unchanged. A user editing a handle to its
    /// own current value does not conflict with itself.
    pub async fn edit(&self, id: Uuid, patch: &UserPatch) -> DbErrorResult<()> {
        if let Some(ref hash) = patch.password_hash {
            if hash.is_empty() {
                return Err(DbError::EmptyPasswordHash {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let mut tx = self.pool.begin().await?;

        let id_str = id.to_string();
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(&id_str)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::UserNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let current = row.into_user()?;

        let email = patch.email.clone().or(current.email);
        let name = patch.name.clone().or(current.name);
        let phone = patch.phone.clone().or(current.phone);
        let password_hash = patch
            .password_hash
            .clone()
            .unwrap_or(current.password_hash);
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
                UPDATE users
                SET email = ?, name = ?, phone = ?, password_hash = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&email)
        .bind(&name)
        .bind(&phone)
        .bind(&password_hash)
        .bind(updated_at)
        .bind(&id_str)
        .execute(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        tx.commit().await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Look up the user holding `value` in exactly one login field.
    ///
    /// Matching is exact and case-sensitive, the same comparison the
    /// unique indexes apply at write time.
    pub async fn find_by_login_field(
        &self,
        field: LoginField,
        value: &str,
    ) -> DbErrorResult<Option<User>> {
        let sql = match field {
            LoginField::Email => {
                format!("SELECT {SELECT_COLUMNS} FROM users WHERE email = ?")
            }
            LoginField::Name => {
                format!("SELECT {SELECT_COLUMNS} FROM users WHERE name = ?")
            }
            LoginField::Phone => {
                format!("SELECT {SELECT_COLUMNS} FROM users WHERE phone = ?")
            }
        };

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Destructive reset of all users. Test/maintenance use only.
    pub async fn clear(&self) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        Ok(())
    }
}

/// Translate a unique-index violation into `LoginOccupied`, identifying
/// which of email/name/phone collided. Anything else passes through.
#[track_caller]
fn map_unique_violation(e: sqlx::Error) -> DbError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            let message = db_err.message().to_string();
            for field in LoginField::ALL {
                if message.contains(&format!("users.{}", field.as_str())) {
                    return DbError::LoginOccupied {
                        field,
                        location: ErrorLocation::from(Location::caller()),
                    };
                }
            }
        }
    }

    DbError::from(e)
}
