//! Access policy.
//!
//! Checks are plain functions over the loaded document and the request's
//! [`Caller`]; run them inside the same transaction as the operation they
//! guard so the user they resolve cannot change underneath it.

use partshop_core::Role;
use tracing::warn;

use crate::error::{AppError, Result};
use crate::models::{Caller, Store, User};

/// Resolve the caller to a stored user.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` if the caller has no session or the
/// session's user no longer exists.
pub fn require_authenticated<'a>(store: &'a Store, caller: &Caller) -> Result<&'a User> {
    let Some(user_id) = caller.user_id else {
        return Err(AppError::Unauthorized("authentication required".to_string()));
    };
    store
        .users
        .iter()
        .find(|u| u.id == user_id)
        .ok_or_else(|| {
            warn!(%user_id, "Session refers to a missing user");
            AppError::Unauthorized("authentication required".to_string())
        })
}

/// Resolve the caller and require `role`.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` as [`require_authenticated`] does, and
/// `AppError::Forbidden` if the user's role differs.
pub fn require_role<'a>(store: &'a Store, caller: &Caller, role: Role) -> Result<&'a User> {
    let user = require_authenticated(store, caller)?;
    if !user.has_role(role) {
        warn!(user_id = %user.id, required = %role, actual = %user.role, "Role check failed");
        return Err(AppError::Forbidden("insufficient permissions".to_string()));
    }
    Ok(user)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use partshop_core::{Email, PasswordDigest, UserId};

    use super::*;
    use crate::db::default_store;

    fn store_with_customer() -> Store {
        let mut store = default_store();
        store.users.push(User {
            id: UserId::new(2),
            name: "Customer".to_string(),
            email: Email::new_unchecked("customer@shop.local"),
            password_hash: PasswordDigest::from_password("secret"),
            role: Role::User,
        });
        store
    }

    #[test]
    fn test_anonymous_is_unauthorized() {
        let store = store_with_customer();
        assert!(matches!(
            require_authenticated(&store, &Caller::anonymous()),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_unknown_user_is_unauthorized() {
        let store = store_with_customer();
        assert!(matches!(
            require_authenticated(&store, &Caller::user(UserId::new(99))),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_authenticated_resolves_user() {
        let store = store_with_customer();
        let user = require_authenticated(&store, &Caller::user(UserId::new(2))).unwrap();
        assert_eq!(user.name, "Customer");
    }

    #[test]
    fn test_role_mismatch_is_forbidden() {
        let store = store_with_customer();
        assert!(matches!(
            require_role(&store, &Caller::user(UserId::new(2)), Role::Admin),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_role_check_authenticates_first() {
        let store = store_with_customer();
        assert!(matches!(
            require_role(&store, &Caller::anonymous(), Role::Admin),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_admin_passes_role_check() {
        let store = store_with_customer();
        let admin = require_role(&store, &Caller::user(UserId::new(1)), Role::Admin).unwrap();
        assert_eq!(admin.role, Role::Admin);
    }
}
