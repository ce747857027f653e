pub mod claims;
pub mod clock;
pub mod error;
pub mod password_hasher;
pub mod token_issuer;

pub use claims::Claims;
pub use clock::{Clock, SystemClock};
pub use error::{AuthError, Result};
pub use password_hasher::CredentialHasher;
pub use token_issuer::{TOKEN_TTL_SECS, TokenIssuer};

#[cfg(test)]
mod tests;
