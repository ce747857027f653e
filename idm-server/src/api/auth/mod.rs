pub mod auth;
pub mod signin_request;
pub mod signup_request;
pub mod token_response;
