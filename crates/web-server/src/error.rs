use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] ledger::LedgerError),

    #[error("Journal lock poisoned by a panicked request")]
    Poisoned,

    #[error("Ledger task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Ledger(ledger_err) => {
                tracing::error!(error = %ledger_err, "Ledger error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The trade ledger could not be read or written".to_string(),
                )
            }
            AppError::Poisoned => {
                tracing::error!("Journal lock poisoned.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The journal is unavailable".to_string(),
                )
            }
            AppError::Task(join_err) => {
                tracing::error!(error = %join_err, "Ledger task failed.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The trade ledger could not be read or written".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
