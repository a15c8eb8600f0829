//! Business logic for the storefront.
//!
//! # Services
//!
//! - `auth` - Registration, login, and admin account creation
//! - `catalog` - Product listing and admin-only product management
//! - `cart` - Per-user carts and their valuation
//! - `policy` - Authentication and role checks shared by the above
//!
//! Each module exposes pure functions over a loaded [`Store`](crate::models::Store)
//! and a service struct that runs them inside a [`DocumentStore`](crate::db::DocumentStore)
//! transaction.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod policy;

pub use auth::AuthService;
pub use cart::CartService;
pub use catalog::{CatalogService, DEFAULT_PAGE_SIZE};
pub use policy::{require_authenticated, require_role};
