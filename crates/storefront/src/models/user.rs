//! User domain types.

use partshop_core::{Email, PasswordDigest, Role, UserId};
use serde::{Deserialize, Serialize};

/// A shop user as stored in the document.
///
/// Never send this outward; use [`PublicUser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique, strictly positive ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique across users (case-sensitive).
    pub email: Email,
    /// SHA-256 hex digest of the password.
    pub password_hash: PasswordDigest,
    /// Access role.
    pub role: Role,
}

impl User {
    /// Whether the user holds `role`.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

/// The outward view of a [`User`], without the password digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: Role,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}
