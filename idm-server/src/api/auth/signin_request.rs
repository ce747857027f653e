use crate::api::error::{ApiError, Result as ApiErrorResult};

use serde::Deserialize;

/// Signin body: a free-form login (email, name or phone) plus password.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub login: Option<String>,
    pub password: Option<String>,
}

impl SigninRequest {
    pub fn validate(&self) -> ApiErrorResult<(&str, &str)> {
        let login = self
            .login
            .as_deref()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| ApiError::validation("login is required", Some("login")))?;

        let password = self
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::validation("password is required", Some("password")))?;

        Ok((login, password))
    }
}
