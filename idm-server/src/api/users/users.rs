//! Authenticated user handlers.

use crate::api::error::{ApiError, Result as ApiErrorResult};
use crate::api::extractors::auth_user::AuthUser;
use crate::api::users::update_user_request::UpdateUserRequest;
use crate::api::users::user_dto::UserDto;
use crate::api::users::user_response::UserResponse;
use crate::state::AppState;

use idm_core::UserPatch;
use idm_db::UserRepository;

use axum::Json;
use axum::extract::State;
use http::StatusCode;
use log::info;

/// GET /user/me
///
/// A valid token whose user has since disappeared is still unauthorized:
/// the credential no longer proves a live identity.
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiErrorResult<Json<UserResponse>> {
    let users = UserRepository::new(state.pool.clone());

    let user = users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;

    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}

/// PATCH /user/me
///
/// Field-level edit of the authenticated user. A patched password is
/// re-hashed; patched handles re-run the uniqueness check and a collision
/// leaves the record untouched.
pub async fn update_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<UpdateUserRequest>,
) -> ApiErrorResult<StatusCode> {
    request.validate()?;

    let password_hash = match request.password.as_deref() {
        Some(password) => Some(state.hasher.hash(password)?),
        None => None,
    };

    let users = UserRepository::new(state.pool.clone());
    users
        .edit(
            user_id,
            &UserPatch {
                email: request.email.clone(),
                name: request.name.clone(),
                phone: request.phone.clone(),
                password_hash,
            },
        )
        .await?;

    info!("User {} updated", user_id);

    Ok(StatusCode::NO_CONTENT)
}
