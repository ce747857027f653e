use crate::{ConfigError, ConfigErrorResult, MIN_JWT_SECRET_LEN};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret for access tokens
    pub jwt_secret: Option<String>,
}

impl AuthConfig {
    /// A missing signing key is a fatal configuration error: the server
    /// cannot issue or validate tokens without it.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self
            .jwt_secret
            .as_ref()
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

        if secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least 32 characters, got {}",
                secret.len()
            )));
        }

        Ok(())
    }
}
