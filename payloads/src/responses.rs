use serde::{Deserialize, Serialize};

use crate::Item;

/// A named grouping of products, in the order the backend returns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<Item>,
}

/// The full product listing for the storefront home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Products {
    pub categories: Vec<Category>,
}
