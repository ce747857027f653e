use crate::LoginField;

/// Input to user creation. The password has already been run through the
/// credential hasher; plaintext never reaches the store.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    /// The login handles present in this input, tagged by field.
    pub fn login_handles(&self) -> Vec<(LoginField, &str)> {
        let mut handles = Vec::new();
        if let Some(ref email) = self.email {
            handles.push((LoginField::Email, email.as_str()));
        }
        if let Some(ref name) = self.name {
            handles.push((LoginField::Name, name.as_str()));
        }
        if let Some(ref phone) = self.phone {
            handles.push((LoginField::Phone, phone.as_str()));
        }
        handles
    }
}
