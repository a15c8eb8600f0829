//! Seed document written on first start.

use partshop_core::{Email, PasswordDigest, Price, ProductId, Role, UserId};

use crate::models::{Product, Store, User};

/// Email of the seeded administrator.
pub const SEED_ADMIN_EMAIL: &str = "admin@shop.local";

/// Password of the seeded administrator. Change it after first login.
pub const SEED_ADMIN_PASSWORD: &str = "admin123";

/// The initial document: seven catalog products, one administrator, no carts.
#[must_use]
pub fn default_store() -> Store {
    Store {
        products: default_products(),
        users: vec![User {
            id: UserId::new(1),
            name: "Administrator".to_string(),
            email: Email::new_unchecked(SEED_ADMIN_EMAIL),
            password_hash: PasswordDigest::from_password(SEED_ADMIN_PASSWORD),
            role: Role::Admin,
        }],
        carts: Vec::new(),
    }
}

fn default_products() -> Vec<Product> {
    [
        (
            "VAZ oil filter",
            "Quality oil filter for VAZ cars. Keeps the oil clean and extends engine life.",
            450,
            "/assets/img/фильтр.jpg",
        ),
        (
            "VAZ brake pads",
            "Set of front brake pads for VAZ cars. Reliable braking and stability on the road.",
            1200,
            "/assets/img/колодки.jpg",
        ),
        (
            "Battery 60 Ah",
            "Dependable 60 Ah battery for passenger cars. Confident engine starts in any season.",
            5800,
            "/assets/img/акум.jpg",
        ),
        (
            "Engine oil 10W-40",
            "Semi-synthetic 10W-40 oil for stable engine operation across driving conditions.",
            2100,
            "/assets/img/t1.jpeg",
        ),
        (
            "Spark plug set",
            "Set of spark plugs with extended service life and a steady spark.",
            950,
            "/assets/img/t2.jpeg",
        ),
        (
            "Timing belt",
            "Durable timing belt for VAZ cars with increased wear resistance.",
            1350,
            "/assets/img/t3.jpeg",
        ),
        (
            "Cabin air filter",
            "Cabin filter that keeps dust and allergens out of the car interior.",
            650,
            "/assets/img/p1.jpeg",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, description, price, image), id)| Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::from_units(price),
        image: image.to_string(),
    })
    .collect()
}
