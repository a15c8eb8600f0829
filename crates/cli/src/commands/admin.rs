//! Admin user management commands.
//!
//! Admins cannot be created through the API; this is the supported way to
//! add one beyond the seeded `admin@shop.local`.

use partshop_core::UserId;
use partshop_storefront::db::DocumentStore;
use partshop_storefront::services::AuthService;

use super::CommandError;

/// Create a new admin user.
///
/// # Returns
///
/// The ID of the created admin user.
///
/// # Errors
///
/// Returns `AppError::Validation` for empty fields or a malformed email and
/// `AppError::Conflict` if the email is taken.
pub async fn create_user(
    store: &DocumentStore,
    email: &str,
    name: &str,
    password: &str,
) -> Result<UserId, CommandError> {
    let user = AuthService::new(store)
        .create_admin(name, email, password)
        .await?;

    tracing::info!(
        "Admin user created successfully! ID: {}, Email: {}",
        user.id,
        user.email
    );
    Ok(user.id)
}
