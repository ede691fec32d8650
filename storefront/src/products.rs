//! Mount-time product fetch with snapshot and subscription observation.

use std::future::Future;

use payloads::responses;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::state::{LoadState, ProductsSnapshot};

/// Fetches the product listing once per mount and publishes the state
/// transitions to the owning element.
///
/// `mount` must be called within a tokio runtime. Dropping the loader and
/// every subscription closes the state channel, so a settlement arriving
/// after unmount is discarded.
pub struct ProductsLoader {
    state: watch::Receiver<LoadState>,
}

impl ProductsLoader {
    /// Start loading. The injected fetch is invoked exactly once, with no
    /// arguments; `FnOnce` enforces this at the type level.
    pub fn mount<F, Fut>(fetch_products: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<responses::Products, String>>
            + Send
            + 'static,
    {
        let (tx, rx) = watch::channel(LoadState::Loading);
        tokio::spawn(async move {
            let state = match fetch_products().await {
                Ok(products) => LoadState::Loaded(products.categories),
                Err(e) => LoadState::Failed(e),
            };
            // Fails only when every receiver is gone (unmounted).
            let _ = tx.send(state);
        });
        Self { state: rx }
    }

    /// The current state, flattened for rendering.
    pub fn snapshot(&self) -> ProductsSnapshot {
        self.state.borrow().snapshot()
    }

    /// Wait for the fetch to settle, then return the terminal snapshot.
    /// Returns immediately if it already has. A fetch that never settles
    /// never resolves this future.
    pub async fn settled(&mut self) -> ProductsSnapshot {
        if let Ok(state) = self.state.wait_for(|s| !s.is_loading()).await {
            return state.snapshot();
        }
        // The runtime tore the fetch task down mid-flight; report the last
        // published state.
        self.state.borrow().snapshot()
    }

    /// State stream for the owning element, starting with the current
    /// state. One item per transition; the element re-reads the full
    /// snapshot on each.
    pub fn subscribe(&self) -> WatchStream<LoadState> {
        WatchStream::new(self.state.clone())
    }
}
