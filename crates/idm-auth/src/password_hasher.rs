use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;

/// One-way credential hasher (Argon2id).
///
/// Output is a salted PHC string; the plaintext is never stored or logged
/// and cannot be recovered from the hash.
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(hash.to_string())
    }

    /// Check `plaintext` against a stored hash. A mismatch is `Ok(false)`;
    /// an unparseable hash is an error.
    #[track_caller]
    pub fn verify(&self, plaintext: &str, hash: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash {
            message: format!("Stored hash is not parseable: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}
