use idm_core::LoginField;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Login is occupied: {field} {location}")]
    LoginOccupied {
        field: LoginField,
        location: ErrorLocation,
    },

    #[error("No such login: {login} {location}")]
    LoginNotFound {
        login: String,
        location: ErrorLocation,
    },

    #[error("Ambiguous login: {login} matches more than one user {location}")]
    AmbiguousLogin {
        login: String,
        location: ErrorLocation,
    },

    #[error("User not found: {id} {location}")]
    UserNotFound { id: Uuid, location: ErrorLocation },

    #[error("Invalid record: {message} {location}")]
    InvalidRecord {
        message: String,
        location: ErrorLocation,
    },

    #[error("User must have at least one login handle {location}")]
    NoLoginHandle { location: ErrorLocation },

    #[error("Password hash must not be empty {location}")]
    EmptyPasswordHash { location: ErrorLocation },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
