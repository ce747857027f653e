use idm_auth::{CredentialHasher, TokenIssuer};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared per-request dependencies. Everything here is cheap to clone;
/// repositories are built from the pool inside each handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub issuer: Arc<TokenIssuer>,
    pub hasher: Arc<CredentialHasher>,
}
