use axum::extract::State;
use axum::Json;
use lego_core::publisher::Publisher;

use crate::state::AppState;

/// GET /api/publishers — the full 110-entry roster. Query parameters are
/// ignored; filtering only applies to aggregation, never to this listing.
pub async fn list_publishers(State(app): State<AppState>) -> Json<Vec<Publisher>> {
    Json(app.registry.all().to_vec())
}
