//! Seed the data file with the sample catalog.

use std::path::PathBuf;

use tracing::info;

use mockfront_storefront::seed::sample_catalog;
use mockfront_storefront::store::{DocumentStore, JsonFileStore};
use mockfront_storefront::types::Document;

/// Write `Document { products: sample_catalog(), checkout: None }` to the
/// data file. The checkout slot stays empty until the first
/// `checkoutCreate` mutation.
///
/// # Errors
///
/// Fails if the file already exists without `--force`, or on I/O errors.
pub async fn run(
    data_file: Option<PathBuf>,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = super::resolve_data_file(data_file)?;

    if path.exists() && !force {
        return Err(format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        )
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let document = Document {
        products: sample_catalog(),
        checkout: None,
    };

    let store = JsonFileStore::new(&path);
    store.save(&document).await?;

    info!(
        path = %path.display(),
        products = document.products.len(),
        "seeded data file"
    );
    Ok(())
}
