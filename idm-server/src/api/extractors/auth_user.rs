use crate::api::error::{ApiError, Result as ApiErrorResult};
use crate::state::AppState;

use idm_auth::AuthError;

use std::panic::Location;

use axum::extract::FromRequestParts;
use error_location::ErrorLocation;
use http::header::AUTHORIZATION;
use http::request::Parts;
use uuid::Uuid;

/// The authenticated caller, extracted from the `Authorization: Bearer`
/// header. Token validation happens here; handlers receive a user id.
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> ApiErrorResult<Self> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| AuthError::MissingHeader {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let value = header.to_str().map_err(|_| AuthError::InvalidToken {
            message: "Authorization header is not valid UTF-8".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let token = value
            .strip_prefix("Bearer ")
            .ok_or_else(|| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let user_id = state.issuer.validate(token)?;

        Ok(AuthUser(user_id))
    }
}
