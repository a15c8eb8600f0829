//! Core types for Partshop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod digest;
pub mod email;
pub mod id;
pub mod price;
pub mod role;

pub use digest::PasswordDigest;
pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
pub use role::{Role, RoleParseError};
