use crate::{AuthError, Claims, Clock, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Access tokens live exactly seven days from issuance. No sliding
/// expiration, no refresh.
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Mints and validates bearer tokens bound to a user id.
///
/// Validation is pure: the only inputs are the token, the key and the
/// injected clock, so concurrent requests validate freely in parallel.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Create an issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against the injected clock in validate(),
        // not against the library's view of system time.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            clock,
        }
    }

    /// Issue a token for `user_id`, expiring `TOKEN_TTL_SECS` from now.
    #[track_caller]
    pub fn issue(&self, user_id: Uuid) -> AuthErrorResult<String> {
        let iat = self.clock.now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Validate a token and return the user id it is bound to.
    ///
    /// A token is valid while `now <= exp`; the first second past the
    /// boundary fails with `TokenExpired`.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Uuid> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let claims = token_data.claims;
        claims.validate()?;

        if self.clock.now().timestamp() > claims.exp {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Uuid::parse_str(&claims.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a UUID: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
