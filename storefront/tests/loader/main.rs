mod observation;

use storefront::ProductsLoader;
use test_helpers::{MockProductsApi, mock};

#[tokio::test]
async fn fetches_products_on_mount() -> anyhow::Result<()> {
    test_helpers::init_tracing();
    let api = MockProductsApi::resolving(mock::sample_products());
    let mut loader = ProductsLoader::mount(api.fetch());

    loader.settled().await;
    assert_eq!(api.call_count(), 1);

    Ok(())
}
