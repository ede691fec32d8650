pub mod products;
pub mod state;
pub mod telemetry;

pub use products::ProductsLoader;
pub use state::{LoadState, ProductsSnapshot};

use payloads::APIClient;

/// Runtime configuration for the storefront.
pub struct Config {
    /// Base URL of the backend serving `/api/products`.
    pub backend_url: String,
}

impl Config {
    /// Read configuration from the environment, loading a `.env` file if
    /// one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let backend_url = std::env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        Config { backend_url }
    }
}

/// Build an API client against the configured backend.
pub fn get_api_client(config: &Config) -> APIClient {
    APIClient {
        address: config.backend_url.clone(),
        inner_client: reqwest::Client::new(),
    }
}

/// Mount the product listing against the live backend.
pub fn load_products(config: &Config) -> ProductsLoader {
    let client = get_api_client(config);
    ProductsLoader::mount(move || async move {
        client.get_products().await.map_err(|e| {
            tracing::warn!("product listing fetch failed: {e}");
            e.to_string()
        })
    })
}
