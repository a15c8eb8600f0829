//! Domain models for the store document.
//!
//! These are the plain records persisted in the JSON document. Field names
//! follow the document's camelCase layout (`passwordHash`, `productId`,
//! `userId`).

pub mod cart;
pub mod document;
pub mod product;
pub mod session;
pub mod user;

pub use cart::{Cart, CartItem, CartLineView, CartView};
pub use document::Store;
pub use product::{Product, ProductInput, ProductPage};
pub use session::{Caller, session_keys};
pub use user::{PublicUser, User};
