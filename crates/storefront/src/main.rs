//! Mockfront Storefront - mock e-commerce GraphQL API.
//!
//! This binary serves a Relay-style paginated product catalog and a
//! single-cart checkout mutation API on port 4000, backed by one JSON
//! document on disk.
//!
//! # Architecture
//!
//! - Axum web framework with async-graphql for the schema
//! - One flat JSON document as the store (seed it with `mf-cli seed`)
//! - Whole-document read-modify-write per mutation, last writer wins

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use mockfront_storefront::config::StorefrontConfig;
use mockfront_storefront::routes;
use mockfront_storefront::state::AppState;
use mockfront_storefront::store::{DocumentStore, JsonFileStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing with EnvFilter; defaults to info level for our
    // crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mockfront_storefront=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Build application state over the JSON file store
    let store = Arc::new(JsonFileStore::new(config.data_file.clone()));
    if let Err(err) = store.load().await {
        tracing::warn!(
            error = %err,
            path = %config.data_file.display(),
            "data file not readable yet; run `mf-cli seed` to create it"
        );
    }
    let state = AppState::new(config.clone(), store);

    // Build router
    let app = routes::router(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {addr}");
    tracing::info!("GraphiQL available at http://{addr}/graphql");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
