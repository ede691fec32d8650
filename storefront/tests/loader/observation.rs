use std::time::Duration;

use futures::StreamExt;
use storefront::{LoadState, ProductsLoader};
use test_helpers::{MockProductsApi, mock};

#[tokio::test]
async fn subscription_yields_each_transition() -> anyhow::Result<()> {
    let (api, settle) = MockProductsApi::manual();
    let loader = ProductsLoader::mount(api.fetch());
    let mut states = loader.subscribe();

    // The stream starts with the current state.
    assert_eq!(states.next().await, Some(LoadState::Loading));

    assert!(settle.reject("Error"));
    assert_eq!(
        states.next().await,
        Some(LoadState::Failed("Error".to_string()))
    );

    Ok(())
}

#[tokio::test]
async fn unmount_discards_late_settlement() -> anyhow::Result<()> {
    let (api, settle) = MockProductsApi::manual();
    let loader = ProductsLoader::mount(api.fetch());
    assert!(loader.snapshot().is_loading);

    drop(loader);

    // The fetch future is still running; its eventual result has nowhere
    // to land and is dropped with the state channel.
    assert!(settle.resolve(mock::sample_products()));
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(api.call_count(), 1);

    Ok(())
}

#[tokio::test]
async fn rejection_is_absorbed_not_propagated() -> anyhow::Result<()> {
    let api = MockProductsApi::rejecting("boom");
    let loader = ProductsLoader::mount(api.fetch());
    let mut states = loader.subscribe();

    // Both observers see the same terminal state; nothing panics or
    // escapes the loader task.
    while let Some(state) = states.next().await {
        if let LoadState::Failed(e) = state {
            assert_eq!(e, "boom");
            break;
        }
    }
    assert_eq!(loader.snapshot().error, Some("boom".to_string()));

    Ok(())
}
