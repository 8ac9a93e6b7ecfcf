use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lego_core::LegoError;

/// Unified error type for HTTP responses.
///
/// Generation errors (a date that fails calendar parsing) map to 400 with
/// the dashboard's plain-text body shape `Bad Request: <message>`; anything
/// else is a 500. Bodies are plain text, not JSON — browser consumers only
/// read them for display.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.0.downcast_ref::<LegoError>().is_some() {
            return (StatusCode::BAD_REQUEST, format!("Bad Request: {}", self.0)).into_response();
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal Server Error: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
