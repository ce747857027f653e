pub mod login_field;
pub mod new_user;
pub mod user;
pub mod user_patch;
