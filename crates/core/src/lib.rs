//! Partshop Core - Shared types library.
//!
//! This crate provides common types used across all Partshop components:
//! - `storefront` - Store access layer, services, and the JSON API binary
//! - `cli` - Command-line tools for initializing and managing the store file
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, roles, and digests

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
