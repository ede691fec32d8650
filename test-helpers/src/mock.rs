//! Sample product listings shared across tests.
//!
//! Items are opaque to the loader, so these carry a realistic but
//! arbitrary shape.

use payloads::responses;
use serde_json::json;

/// Two-category menu with a few priced items.
pub fn sample_products() -> responses::Products {
    responses::Products {
        categories: vec![
            responses::Category {
                name: "Breakfast".to_string(),
                items: vec![
                    json!({ "id": 1, "name": "Coffee", "price": 5 }),
                    json!({ "id": 2, "name": "Sandwich", "price": 10 }),
                ],
            },
            responses::Category {
                name: "Lunch".to_string(),
                items: vec![
                    json!({ "id": 3, "name": "Hamburger", "price": 15 }),
                ],
            },
        ],
    }
}

/// A single empty category, the smallest non-trivial listing.
pub fn single_empty_category() -> responses::Products {
    responses::Products {
        categories: vec![responses::Category {
            name: "Category".to_string(),
            items: vec![],
        }],
    }
}
