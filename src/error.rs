use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_contact::ContactError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the JSON API. The HTML form flow never reaches this
/// type; its failures feed back into the submission workflow instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Contact(#[from] ContactError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Contact(err) if err.is_rejection() => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),
            AppError::Contact(err) => {
                tracing::error!("contact submission failed: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
