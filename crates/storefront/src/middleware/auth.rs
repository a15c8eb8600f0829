//! Session-backed caller identity.
//!
//! Handlers never read the session directly; they take a [`CurrentCaller`]
//! and pass the [`Caller`] inside to the services, which do the actual
//! authentication and role checks against the store.

use axum::{extract::FromRequestParts, http::request::Parts};
use partshop_core::UserId;
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{Caller, session_keys};

/// Extractor for the identity the request acts as.
///
/// Never rejects an anonymous request. A request without a session layer,
/// or whose session has no user, yields [`Caller::anonymous`].
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentCaller(caller): CurrentCaller) -> Result<Json<CartView>> {
///     CartService::new(state.store()).get(&caller).await.map(Json)
/// }
/// ```
pub struct CurrentCaller(pub Caller);

impl<S> FromRequestParts<S> for CurrentCaller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(session) = parts.extensions.get::<Session>() else {
            return Ok(Self(Caller::anonymous()));
        };

        let user_id = session
            .get::<UserId>(session_keys::USER_ID)
            .await
            .map_err(session_error)?;

        Ok(Self(Caller { user_id }))
    }
}

/// Bind the session to `user_id` after a successful login.
///
/// The session ID is rotated first so a pre-login cookie cannot be reused.
///
/// # Errors
///
/// Returns `AppError::Internal` if the session cannot be modified.
pub async fn set_current_user(session: &Session, user_id: UserId) -> Result<(), AppError> {
    session.cycle_id().await.map_err(session_error)?;
    session
        .insert(session_keys::USER_ID, user_id)
        .await
        .map_err(session_error)
}

/// Drop all session data (logout).
///
/// # Errors
///
/// Returns `AppError::Internal` if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), AppError> {
    session.flush().await.map_err(session_error)
}

fn session_error(err: tower_sessions::session::Error) -> AppError {
    AppError::Internal(format!("session error: {err}"))
}
