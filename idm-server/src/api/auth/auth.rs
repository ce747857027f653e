//! Signup and signin handlers - the authentication orchestration.

use crate::api::auth::signin_request::SigninRequest;
use crate::api::auth::signup_request::SignupRequest;
use crate::api::auth::token_response::TokenResponse;
use crate::api::error::{ApiError, Result as ApiErrorResult};
use crate::state::AppState;

use idm_core::NewUser;
use idm_db::{LoginResolver, UserRepository};

use axum::Json;
use axum::extract::State;
use http::StatusCode;
use log::info;

/// POST /auth/signup
///
/// Create an identity and hand back a fresh access token. The password is
/// hashed before it reaches the store; the plaintext is never persisted
/// or logged.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiErrorResult<(StatusCode, Json<TokenResponse>)> {
    let password = request.validate()?;
    let password_hash = state.hasher.hash(password)?;

    let users = UserRepository::new(state.pool.clone());
    let id = users
        .create(&NewUser {
            email: request.email.clone(),
            name: request.name.clone(),
            phone: request.phone.clone(),
            password_hash,
        })
        .await?;

    let access_token = state.issuer.issue(id)?;
    info!("User {} signed up", id);

    Ok((StatusCode::CREATED, Json(TokenResponse { access_token })))
}

/// POST /auth/signin
///
/// Resolve the free-form login to exactly one user, verify the password
/// against the stored hash, and issue a token. A wrong password is 403;
/// an unresolvable login is 404, so the two cases stay distinguishable.
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> ApiErrorResult<Json<TokenResponse>> {
    let (login, password) = request.validate()?;

    let resolver = LoginResolver::new(state.pool.clone());
    let user = resolver.resolve(login).await?;

    if !state.hasher.verify(password, &user.password_hash)? {
        return Err(ApiError::forbidden("Password does not match"));
    }

    let access_token = state.issuer.issue(user.id)?;
    info!("User {} signed in", user.id);

    Ok(Json(TokenResponse { access_token }))
}
