//! Session-related types.

use partshop_core::UserId;
use serde::{Deserialize, Serialize};

/// The identity a request acts as.
///
/// Resolved by the HTTP layer from the session cookie and handed to the
/// access policy. `user_id` is `None` for anonymous requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id: Option<UserId>,
}

impl Caller {
    /// An unauthenticated caller.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// A caller logged in as `user_id`.
    #[must_use]
    pub const fn user(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for the logged-in user's ID.
    pub const USER_ID: &str = "user_id";
}
