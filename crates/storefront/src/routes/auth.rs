//! Authentication route handlers.
//!
//! Login stores the user ID in the session; every other handler resolves the
//! caller from it through [`CurrentCaller`].

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::info;

use super::ApiJson;
use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{CurrentCaller, clear_current_user, set_current_user};
use crate::models::PublicUser;
use crate::services::{AuthService, auth::sanitize};
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Create a customer account. Does not log the new user in.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>)> {
    let user = AuthService::new(state.store())
        .register(&body.name, &body.email, &body.password)
        .await?;
    Ok((StatusCode::CREATED, Json(sanitize(&user))))
}

/// Verify credentials and bind the session to the user.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<PublicUser>> {
    let user = AuthService::new(state.store())
        .login(&body.email, &body.password)
        .await?;

    set_current_user(&session, user.id).await?;
    set_sentry_user(&user.id, Some(user.email.as_str()));
    info!(user_id = %user.id, "User logged in");

    Ok(Json(sanitize(&user)))
}

/// End the session. Succeeds even without one.
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_user(&session).await?;
    clear_sentry_user();
    Ok(StatusCode::NO_CONTENT)
}

/// The logged-in user.
pub async fn me(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
) -> Result<Json<PublicUser>> {
    let user = AuthService::new(state.store())
        .current_user(&caller)
        .await?;
    Ok(Json(sanitize(&user)))
}
