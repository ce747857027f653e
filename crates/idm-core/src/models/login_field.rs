use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// One of a user's interchangeable login handles.
///
/// Each field is globally unique among users where present; a free-form
/// login string at signin time is matched against all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginField {
    Email,
    Name,
    Phone,
}

impl LoginField {
    /// All fields, in resolution order.
    pub const ALL: [LoginField; 3] = [Self::Email, Self::Name, Self::Phone];

    /// Convert to database column name / wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name => "name",
            Self::Phone => "phone",
        }
    }
}

impl FromStr for LoginField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "email" => Ok(Self::Email),
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            _ => Err(CoreError::InvalidLoginField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for LoginField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
