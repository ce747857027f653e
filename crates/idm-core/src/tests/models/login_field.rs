use crate::LoginField;

use std::str::FromStr;

#[test]
fn test_login_field_as_str() {
    assert_eq!(LoginField::Email.as_str(), "email");
    assert_eq!(LoginField::Name.as_str(), "name");
    assert_eq!(LoginField::Phone.as_str(), "phone");
}

#[test]
fn test_login_field_from_str() {
    assert_eq!(LoginField::from_str("email").unwrap(), LoginField::Email);
    assert_eq!(LoginField::from_str("name").unwrap(), LoginField::Name);
    assert_eq!(LoginField::from_str("phone").unwrap(), LoginField::Phone);
    assert!(LoginField::from_str("username").is_err());
}

#[test]
fn test_login_field_all_covers_every_field() {
    assert_eq!(LoginField::ALL.len(), 3);
    assert!(LoginField::ALL.contains(&LoginField::Email));
    assert!(LoginField::ALL.contains(&LoginField::Name));
    assert!(LoginField::ALL.contains(&LoginField::Phone));
}
