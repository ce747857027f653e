pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::login_field::LoginField;
pub use models::new_user::NewUser;
pub use models::user::User;
pub use models::user_patch::UserPatch;

#[cfg(test)]
mod tests;
