use axum::Json;
use lego_core::dates::available_dates;

/// GET /api/dates — every date with generated data, ascending.
pub async fn list_dates() -> Json<Vec<String>> {
    Json(available_dates())
}
