//! CLI subcommands.

pub mod reset;
pub mod seed;

use std::path::PathBuf;

use mockfront_storefront::config::StorefrontConfig;

/// Resolve the data file path: flag, then environment, then default.
pub fn resolve_data_file(
    flag: Option<PathBuf>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    match flag {
        Some(path) => Ok(path),
        None => Ok(StorefrontConfig::from_env()?.data_file),
    }
}
