use axum::extract::{Query, State};
use axum::Json;
use lego_core::action::Action;
use lego_core::dates::LAST_DATE;

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct TopActionsParams {
    pub date: Option<String>,
    pub publisher: Option<String>,
    pub group: Option<String>,
}

/// GET /api/topactions?date=YYYY-MM-DD&publisher=<id>&group=Republican|Democrat
///
/// `date` defaults to the last available date. When both `publisher` and
/// `group` are given, `publisher` wins and `group` is ignored entirely.
pub async fn get_top_actions(
    State(app): State<AppState>,
    Query(params): Query<TopActionsParams>,
) -> Result<Json<Vec<Action>>, AppError> {
    let date = params.date.as_deref().unwrap_or(LAST_DATE);
    let criterion = params.publisher.as_deref().or(params.group.as_deref());

    let actions = lego_core::topactions::generate_top_actions(&app.registry, date, criterion)?;
    Ok(Json(actions))
}
