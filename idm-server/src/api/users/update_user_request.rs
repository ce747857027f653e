use crate::api::error::{ApiError, Result as ApiErrorResult};

use serde::Deserialize;

/// Field-level patch for the authenticated user. Absent fields are left
/// untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> ApiErrorResult<()> {
        if let Some(ref password) = self.password {
            if password.is_empty() {
                return Err(ApiError::validation(
                    "password must not be empty",
                    Some("password"),
                ));
            }
        }

        if self.email.is_none()
            && self.name.is_none()
            && self.phone.is_none()
            && self.password.is_none()
        {
            return Err(ApiError::validation("Patch must change something", None));
        }

        Ok(())
    }
}
