use crate::api::error::{ApiError, Result as ApiErrorResult};

use serde::Deserialize;

/// Signup body. Every field is optional at the wire level so that missing
/// fields surface as a 400 from our validation rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

impl SignupRequest {
    /// Boundary validation: non-empty password, at least one login handle.
    pub fn validate(&self) -> ApiErrorResult<&str> {
        let password = self
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::validation("password is required", Some("password")))?;

        let has_handle = [&self.email, &self.name, &self.phone]
            .iter()
            .any(|f| f.as_deref().is_some_and(|v| !v.is_empty()));
        if !has_handle {
            return Err(ApiError::validation(
                "At least one of email, name or phone is required",
                None,
            ));
        }

        Ok(password)
    }
}
