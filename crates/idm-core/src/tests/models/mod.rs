mod login_field;
mod user;
