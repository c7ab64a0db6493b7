//! Reset the checkout in the data file.

use std::path::PathBuf;

use tracing::info;

use mockfront_storefront::store::{DocumentStore, JsonFileStore};

/// Clear the checkout back to "never created" while preserving the
/// catalog.
///
/// # Errors
///
/// Fails if the data file cannot be read or written.
pub async fn run(data_file: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = super::resolve_data_file(data_file)?;

    let store = JsonFileStore::new(&path);
    let mut document = store.load().await?;
    let had_checkout = document.checkout.take().is_some();
    store.save(&document).await?;

    info!(
        path = %path.display(),
        had_checkout,
        "checkout reset"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockfront_storefront::seed;
    use mockfront_storefront::types::Document;

    #[tokio::test]
    async fn test_reset_clears_checkout_and_keeps_catalog() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index.json");

        let store = JsonFileStore::new(&path);
        store
            .save(&Document {
                products: seed::sample_catalog(),
                checkout: Some(seed::default_checkout()),
            })
            .await
            .expect("save");

        run(Some(path)).await.expect("reset");

        let document = store.load().await.expect("load");
        assert!(document.checkout.is_none());
        assert_eq!(document.products.len(), seed::sample_catalog().len());
    }
}
