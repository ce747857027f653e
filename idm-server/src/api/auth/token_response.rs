use serde::Serialize;

/// Bearer credential returned by signup and signin.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}
