use idm_core::NewUser;

/// Stub credential-hasher output. Repository tests never verify passwords,
/// they only require a non-empty opaque hash.
pub const STUB_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c3R1YnNhbHQ$c3R1Ymhhc2g";

pub fn alice() -> NewUser {
    NewUser {
        email: Some("alice89@example.com".to_string()),
        name: Some("Alice".to_string()),
        phone: Some("+79998887766".to_string()),
        password_hash: STUB_HASH.to_string(),
    }
}

pub fn bob() -> NewUser {
    NewUser {
        email: Some("bob@gmail.com".to_string()),
        name: Some("Bob".to_string()),
        phone: Some("+15550001122".to_string()),
        password_hash: STUB_HASH.to_string(),
    }
}
