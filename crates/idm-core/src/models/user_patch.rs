/// Field-level patch for an existing user. Only fields that are `Some`
/// are written; the rest of the record is left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Replacement hash, produced by the credential hasher upstream.
    pub password_hash: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.phone.is_none()
            && self.password_hash.is_none()
    }
}
