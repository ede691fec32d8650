use payloads::responses::Category;

/// Load lifecycle of the product listing for a single mount.
///
/// Starts at `Loading` and moves to exactly one terminal state when the
/// fetch settles. There is no transition out of a terminal state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded(Vec<Category>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Flat view for rendering code. Categories are empty unless loaded.
    pub fn snapshot(&self) -> ProductsSnapshot {
        match self {
            LoadState::Loading => ProductsSnapshot {
                is_loading: true,
                error: None,
                categories: Vec::new(),
            },
            LoadState::Failed(e) => ProductsSnapshot {
                is_loading: false,
                error: Some(e.clone()),
                categories: Vec::new(),
            },
            LoadState::Loaded(categories) => ProductsSnapshot {
                is_loading: false,
                error: None,
                categories: categories.clone(),
            },
        }
    }
}

/// What the owning element reads once per render.
///
/// Exactly one of `is_loading`, `error`, or a non-default `categories`
/// reflects the underlying state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductsSnapshot {
    pub is_loading: bool,
    pub error: Option<String>,
    pub categories: Vec<Category>,
}
