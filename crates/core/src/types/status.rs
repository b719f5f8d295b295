//! User status managed outside this layer.

use serde::{Deserialize, Serialize};

/// Role assigned to a user profile.
///
/// The value is set externally (operations tooling, not this layer); newly
/// created profiles carry no status at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Regular traveller account without admin access.
    User,
    /// Administrator with access to the admin dashboard.
    Admin,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid user status: {s}")),
        }
    }
}
