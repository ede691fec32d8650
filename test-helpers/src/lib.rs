pub mod mock;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use futures::FutureExt;
use futures::future::BoxFuture;
use payloads::responses;
use tokio::sync::oneshot;

static TRACING: Once = Once::new();

/// Initialize tracing once for the whole test binary. Quiet unless
/// `RUST_LOG` says otherwise.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let subscriber = storefront::telemetry::get_subscriber("warn".into());
        storefront::telemetry::init_subscriber(subscriber);
    });
}

type FetchResult = Result<responses::Products, String>;

enum Script {
    Resolve(responses::Products),
    Reject(String),
    Pending,
    Manual(Mutex<Option<oneshot::Receiver<FetchResult>>>),
}

/// Scripted stand-in for the product listing endpoint.
///
/// Records how many times the fetch fires so tests can assert the
/// once-per-mount contract.
pub struct MockProductsApi {
    script: Script,
    calls: Arc<AtomicUsize>,
}

impl MockProductsApi {
    /// A fetch that settles successfully with the given listing.
    pub fn resolving(products: responses::Products) -> Self {
        Self::new(Script::Resolve(products))
    }

    /// A fetch that settles with the given rejection value.
    pub fn rejecting(message: &str) -> Self {
        Self::new(Script::Reject(message.to_string()))
    }

    /// A fetch that never settles.
    pub fn pending() -> Self {
        Self::new(Script::Pending)
    }

    /// A fetch settled through the returned handle, for tests that need
    /// to observe state on both sides of settlement.
    pub fn manual() -> (Self, SettleHandle) {
        let (tx, rx) = oneshot::channel();
        (
            Self::new(Script::Manual(Mutex::new(Some(rx)))),
            SettleHandle(tx),
        )
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times the fetch has fired.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The fetch capability to hand to `ProductsLoader::mount`.
    pub fn fetch(
        &self,
    ) -> impl FnOnce() -> BoxFuture<'static, FetchResult> + Send + use<> {
        let calls = self.calls.clone();
        let outcome = match &self.script {
            Script::Resolve(products) => Outcome::Ready(Ok(products.clone())),
            Script::Reject(message) => {
                Outcome::Ready(Err(message.clone()))
            }
            Script::Pending => Outcome::Pending,
            Script::Manual(rx) => Outcome::Await(rx.lock().unwrap().take()),
        };
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                match outcome {
                    Outcome::Ready(result) => result,
                    Outcome::Pending | Outcome::Await(None) => {
                        std::future::pending().await
                    }
                    Outcome::Await(Some(rx)) => match rx.await {
                        Ok(result) => result,
                        // Settle handle dropped: never settles.
                        Err(_) => std::future::pending().await,
                    },
                }
            }
            .boxed()
        }
    }
}

enum Outcome {
    Ready(FetchResult),
    Pending,
    Await(Option<oneshot::Receiver<FetchResult>>),
}

/// Settles a `MockProductsApi::manual` fetch.
pub struct SettleHandle(oneshot::Sender<FetchResult>);

impl SettleHandle {
    /// Resolve the fetch. Returns false if the fetch future is already
    /// gone.
    pub fn resolve(self, products: responses::Products) -> bool {
        self.0.send(Ok(products)).is_ok()
    }

    /// Reject the fetch with the given value.
    pub fn reject(self, message: &str) -> bool {
        self.0.send(Err(message.to_string())).is_ok()
    }
}
