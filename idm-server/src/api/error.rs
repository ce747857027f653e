//! API error boundary.
//!
//! Domain errors propagate here unmodified and are mapped to transport
//! status codes in one place. None are retried; all are semantic.

use idm_auth::AuthError;
use idm_db::DbError;

use std::panic::Location;

use axum::Json;
use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    fn field(&self) -> Option<String> {
        match self {
            Self::Validation { field, .. } | Self::Conflict { field, .. } => field.clone(),
            _ => None,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Internal { message, .. } => message.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.error_code(),
                message: self.message(),
                field: self.field(),
            },
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::LoginOccupied { field, .. } => Self::Conflict {
                message: format!("Login is occupied: {}", field),
                field: Some(field.as_str().to_string()),
                location,
            },
            DbError::LoginNotFound { login, .. } => Self::NotFound {
                message: format!("No such login: {}", login),
                location,
            },
            DbError::AmbiguousLogin { login, .. } => Self::Conflict {
                message: format!("Ambiguous login: {} matches more than one user", login),
                field: None,
                location,
            },
            DbError::UserNotFound { id, .. } => Self::NotFound {
                message: format!("User not found: {}", id),
                location,
            },
            DbError::NoLoginHandle { .. } => Self::Validation {
                message: "At least one of email, name or phone is required".to_string(),
                field: None,
                location,
            },
            DbError::EmptyPasswordHash { .. } => Self::Validation {
                message: "Password must not be empty".to_string(),
                field: Some("password".to_string()),
                location,
            },
            e => {
                log::error!("Database error: {}", e);
                Self::Internal {
                    message: "Database error".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::JwtEncode { .. } | AuthError::PasswordHash { .. } => {
                log::error!("Credential backend error: {}", e);
                Self::Internal {
                    message: "Credential backend error".to_string(),
                    location,
                }
            }
            e => Self::Unauthorized {
                message: e.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
