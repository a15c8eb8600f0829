//! Password digest type.
//!
//! Passwords are stored as the lowercase hex SHA-256 of their UTF-8 bytes.
//! The scheme is fixed: there is no salt, no work factor, and no way to plug
//! in another hasher.

use core::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a password.
///
/// `Debug` does not print the digest.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Length of the hex encoding.
    pub const HEX_LENGTH: usize = 64;

    /// Digest a plaintext password.
    #[must_use]
    pub fn from_password(password: &str) -> Self {
        Self(hex::encode(Sha256::digest(password.as_bytes())))
    }

    /// Whether `password` hashes to this digest.
    ///
    /// Plain string equality, not constant-time.
    #[must_use]
    pub fn matches(&self, password: &str) -> bool {
        *self == Self::from_password(password)
    }

    /// The hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest([REDACTED])")
    }
}
