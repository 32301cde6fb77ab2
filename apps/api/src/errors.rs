#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Text generation error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Analysis(e) => match e {
                AnalysisError::MissingExceedsTotal { .. } => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_ANALYSIS_INPUT",
                    e.to_string(),
                ),
                AnalysisError::MatcherBuild(detail) => {
                    tracing::error!("Analysis error: {detail}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "ANALYSIS_ERROR",
                        "An analysis error occurred".to_string(),
                    )
                }
            },
            AppError::Llm(e) => {
                tracing::error!("Text generation error: {e}");
                // Upstream failures surface their message so callers can see
                // what the inference router reported.
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    format!("Hosted model request failed: {e}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
