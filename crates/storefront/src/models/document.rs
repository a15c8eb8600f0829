//! The store document root.

use serde::{Deserialize, Deserializer, Serialize};

use super::{Cart, Product, User};

/// The entire persisted application state.
///
/// Missing or `null` arrays read as empty, so documents written by older
/// tooling (which emitted `"carts": null` for an empty list) still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<Product>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub users: Vec<User>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub carts: Vec<Cart>,
}

impl Store {
    /// The cart belonging to `user_id`, if one was ever created.
    #[must_use]
    pub fn cart(&self, user_id: partshop_core::UserId) -> Option<&Cart> {
        self.carts.iter().find(|c| c.user_id == user_id)
    }

    /// Mutable access to the cart belonging to `user_id`.
    #[must_use]
    pub fn cart_mut(&mut self, user_id: partshop_core::UserId) -> Option<&mut Cart> {
        self.carts.iter_mut().find(|c| c.user_id == user_id)
    }

    /// The cart belonging to `user_id`, created empty if missing.
    pub fn cart_or_insert(&mut self, user_id: partshop_core::UserId) -> &mut Cart {
        let index = match self.carts.iter().position(|c| c.user_id == user_id) {
            Some(index) => index,
            None => {
                self.carts.push(Cart::new(user_id));
                self.carts.len() - 1
            }
        };
        &mut self.carts[index]
    }
}

pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_arrays_read_as_empty() {
        let store: Store = serde_json::from_str(r#"{"products": null, "users": []}"#).unwrap();
        assert_eq!(store, Store::default());
    }

    #[test]
    fn test_field_names() {
        let json = r#"{
            "products": [{"id": 1, "name": "Oil filter", "description": "Fits most sedans", "price": 450, "image": "/assets/img/filter.jpg"}],
            "users": [{"id": 1, "name": "Admin", "email": "admin@shop.local",
                       "passwordHash": "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9",
                       "role": "admin"}],
            "carts": [{"userId": 1, "items": [{"productId": 1, "quantity": 2}]}]
        }"#;
        let store: Store = serde_json::from_str(json).unwrap();
        assert_eq!(store.products.len(), 1);
        assert_eq!(store.users[0].role, partshop_core::Role::Admin);
        assert_eq!(store.carts[0].items[0].quantity, 2);

        let value = serde_json::to_value(&store).unwrap();
        assert!(value["users"][0].get("passwordHash").is_some());
        assert!(value["carts"][0].get("userId").is_some());
        assert!(value["carts"][0]["items"][0].get("productId").is_some());
    }

    #[test]
    fn test_cleared_cart_with_null_items() {
        let store: Store =
            serde_json::from_str(r#"{"carts": [{"userId": 3, "items": null}]}"#).unwrap();
        assert!(store.cart(partshop_core::UserId::new(3)).unwrap().items.is_empty());
    }
}
