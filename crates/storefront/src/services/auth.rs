//! Identity operations: registration, credential checks, and lookups.
//!
//! Passwords are stored as a fixed SHA-256 digest (see
//! [`partshop_core::PasswordDigest`]).

use partshop_core::{Email, PasswordDigest, Role, UserId};
use tracing::{info, instrument, warn};

use super::policy::require_authenticated;
use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::models::{Caller, PublicUser, User};

/// Next free user ID: one past the highest existing ID, or 1.
///
/// # Errors
///
/// Returns `AppError::Conflict` when the highest ID is already `i32::MAX`.
pub fn next_user_id(users: &[User]) -> Result<UserId> {
    users
        .iter()
        .map(|u| u.id)
        .max()
        .map_or(Some(UserId::new(1)), |id| id.checked_next())
        .ok_or_else(|| AppError::Conflict("user IDs exhausted".to_string()))
}

/// User with exactly this email (case-sensitive).
#[must_use]
pub fn find_user_by_email<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
    users.iter().find(|u| u.email == *email)
}

/// User with `id`.
#[must_use]
pub fn find_user_by_id(users: &[User], id: UserId) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}

/// The outward view of `user`.
#[must_use]
pub fn sanitize(user: &User) -> PublicUser {
    PublicUser::from(user)
}

/// Append a new user with role `role`.
///
/// # Errors
///
/// Returns `AppError::Validation` if any field is empty or the email is
/// malformed, `AppError::Conflict` if the email is taken or no user ID is
/// left.
pub fn add_user(
    users: &mut Vec<User>,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<User> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "name, email and password are required".to_string(),
        ));
    }
    let email = Email::parse(email).map_err(|e| AppError::Validation(e.to_string()))?;
    if find_user_by_email(users, email.as_str()).is_some() {
        return Err(AppError::Conflict("user already exists".to_string()));
    }

    let user = User {
        id: next_user_id(users)?,
        name: name.to_owned(),
        email,
        password_hash: PasswordDigest::from_password(password),
        role,
    };
    users.push(user.clone());
    Ok(user)
}

/// Register a self-service account. The role is always [`Role::User`].
///
/// # Errors
///
/// As [`add_user`].
pub fn register_user(
    users: &mut Vec<User>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User> {
    add_user(users, name, email, password, Role::User)
}

/// The user whose stored digest matches `password`, if any.
///
/// Unknown email and wrong password are indistinguishable to the caller.
#[must_use]
pub fn verify_credentials<'a>(
    users: &'a [User],
    email: &str,
    password: &str,
) -> Option<&'a User> {
    find_user_by_email(users, email).filter(|u| u.password_hash.matches(password))
}

/// Registration, login, and session-user lookup against the store file.
pub struct AuthService<'a> {
    store: &'a DocumentStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for missing fields or a malformed email,
    /// `AppError::Conflict` if the email is already registered.
    #[instrument(skip(self, name, password))]
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let user = self
            .store
            .update(|doc| register_user(&mut doc.users, name, email, password))
            .await?;
        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Create an administrator. Used by the management CLI only.
    ///
    /// # Errors
    ///
    /// As [`AuthService::register`].
    #[instrument(skip(self, name, password))]
    pub async fn create_admin(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let user = self
            .store
            .update(|doc| add_user(&mut doc.users, name, email, password, Role::Admin))
            .await?;
        info!(user_id = %user.id, "Administrator created");
        Ok(user)
    }

    /// Check an email/password pair.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` if the pair does not match a user.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let store = self.store.load().await?;
        verify_credentials(&store.users, email, password)
            .cloned()
            .ok_or_else(|| {
                warn!("Login failed");
                AppError::Unauthorized("invalid email or password".to_string())
            })
    }

    /// The user behind the caller's session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` if there is no valid session.
    pub async fn current_user(&self, caller: &Caller) -> Result<User> {
        let store = self.store.load().await?;
        require_authenticated(&store, caller).cloned()
    }
}
