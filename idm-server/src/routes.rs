use crate::admin::clear_handler;
use crate::api::auth::auth::{signin, signup};
use crate::api::users::users::{get_me, update_me};
use crate::health::health_handler;
use crate::state::AppState;

use axum::Router;
use axum::routing::{get, post};
use http::Method;
use tower_http::cors::{Any, CorsLayer};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
        .route("/user/me", get(get_me).patch(update_me))
        .route("/admin/clear", post(clear_handler))
        .layer(cors)
        .with_state(state)
}
