use crate::ApiError;

use idm_auth::AuthError;
use idm_core::LoginField;
use idm_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "No such login: Alice".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "No such login: Alice");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("password is required", Some("password"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::unauthorized("Token expired");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let error = ApiError::forbidden("Password does not match");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_occupied_login_converts_to_conflict_with_field() {
    let db_err = DbError::LoginOccupied {
        field: LoginField::Name,
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();
    let response = api_err.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_field_is_absent_when_unset() {
    let error = ApiError::forbidden("Password does not match");
    let response = error.into_response();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(json["error"].get("field").is_none());
}

#[test]
fn test_token_expired_converts_to_unauthorized() {
    let auth_err = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = auth_err.into();

    assert!(matches!(api_err, ApiError::Unauthorized { .. }));
}

#[test]
fn test_sqlx_error_converts_to_internal() {
    let db_err = DbError::from(sqlx::Error::RowNotFound);
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Internal { message, .. } => {
            // Internal detail stays out of the response body
            assert_eq!(message, "Database error");
        }
        _ => panic!("Expected Internal error"),
    }
}
