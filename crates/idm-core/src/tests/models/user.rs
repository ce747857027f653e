use crate::{LoginField, NewUser, User};

use chrono::Utc;
use uuid::Uuid;

fn alice() -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: Some("alice89@example.com".to_string()),
        name: Some("Alice".to_string()),
        phone: Some("+79998887766".to_string()),
        password_hash: "$argon2id$stub".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_user_login_handles_tagged_by_field() {
    let user = alice();
    let handles = user.login_handles();

    assert_eq!(handles.len(), 3);
    assert_eq!(handles[0], (LoginField::Email, "alice89@example.com"));
    assert_eq!(handles[1], (LoginField::Name, "Alice"));
    assert_eq!(handles[2], (LoginField::Phone, "+79998887766"));
}

#[test]
fn test_user_login_handles_skips_unset_fields() {
    let mut user = alice();
    user.email = None;
    user.phone = None;

    let handles = user.login_handles();
    assert_eq!(handles, vec![(LoginField::Name, "Alice")]);
    assert!(user.has_login_handle());
}

#[test]
fn test_user_without_any_handle() {
    let mut user = alice();
    user.email = None;
    user.name = None;
    user.phone = None;

    assert!(!user.has_login_handle());
    assert!(user.login_handles().is_empty());
}

#[test]
fn test_new_user_login_handles() {
    let input = NewUser {
        email: Some("bob@example.com".to_string()),
        name: None,
        phone: Some("+15550001122".to_string()),
        password_hash: "$argon2id$stub".to_string(),
    };

    let handles = input.login_handles();
    assert_eq!(handles.len(), 2);
    assert_eq!(handles[0], (LoginField::Email, "bob@example.com"));
    assert_eq!(handles[1], (LoginField::Phone, "+15550001122"));
}
