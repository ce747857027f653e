pub mod admin;
pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{signin, signup},
        signin_request::SigninRequest,
        signup_request::SignupRequest,
        token_response::TokenResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    users::{
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{get_me, update_me},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
