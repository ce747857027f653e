//! User entity - the durable identity record.

use crate::LoginField;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user identified by up to three interchangeable login handles.
/// Each handle that is set is globally unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Opaque output of the credential hasher. Never leaves the store layer.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The login handles this user can sign in with, tagged by field.
    pub fn login_handles(&self) -> Vec<(LoginField, &str)> {
        let mut handles = Vec::new();
        if let Some(ref email) = self.email {
            handles.push((LoginField::Email, email.as_str()));
        }
        if let Some(ref name) = self.name {
            handles.push((LoginField::Name, name.as_str()));
        }
        if let Some(ref phone) = self.phone {
            handles.push((LoginField::Phone, phone.as_str()));
        }
        handles
    }

    /// A user must keep at least one login handle.
    pub fn has_login_handle(&self) -> bool {
        self.email.is_some() || self.name.is_some() || self.phone.is_some()
    }
}
