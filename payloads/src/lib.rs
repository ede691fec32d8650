pub mod api_client;
pub mod responses;

pub use api_client::{APIClient, ClientError};

/// A single product entry. The storefront passes items through to the
/// rendering layer untouched, so their shape is not interpreted here.
pub type Item = serde_json::Value;
