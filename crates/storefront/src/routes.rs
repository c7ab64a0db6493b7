//! HTTP routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::graphql;
use crate::state::AppState;
use crate::store::DocumentStore;

/// Build the application router: GraphiQL + GraphQL on `/graphql`, plus
/// health endpoints.
pub fn router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route(
            "/graphql",
            get(graphiql).post_service(GraphQL::new(schema)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the GraphiQL IDE.
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the data file is readable before returning OK. Returns 503
/// Service Unavailable until `mf-cli seed` has created it.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().load().await {
        Ok(_) => StatusCode::OK,
        Err(err) => {
            tracing::warn!(error = %err, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
