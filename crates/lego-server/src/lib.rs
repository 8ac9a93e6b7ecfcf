pub mod error;
pub mod routes;
pub mod state;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router() -> Router {
    let app_state = state::AppState::new();

    // Wildcard CORS: the dashboard frontend is served from a different
    // origin and every endpoint is read-only.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/topactions", get(routes::topactions::get_top_actions))
        .route("/api/publishers", get(routes::publishers::list_publishers))
        .route("/api/dates", get(routes::dates::list_dates))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Serve the API on a pre-bound listener.
///
/// Accepting a `TcpListener` lets the caller bind port 0 and read the actual
/// port before starting.
pub async fn serve(listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    let app = build_router();

    tracing::info!("lego dashboard API listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
