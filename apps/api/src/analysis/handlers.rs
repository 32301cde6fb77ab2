//! Axum route handlers for the Analysis API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis::report::{analyze_resume, GapReport};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub report: GapReport,
}

/// POST /api/v1/analysis
///
/// Pure keyword gap analysis — no model call, no state. Empty inputs are
/// valid and produce a degenerate (fully covered) report, not an error.
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let report = analyze_resume(&request.resume_text, &request.job_text)?;

    Ok(Json(AnalyzeResponse { report }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_analyze_returns_scored_report() {
        let request = AnalyzeRequest {
            resume_text: "Python developer".to_string(),
            job_text: "Python and SQL developer".to_string(),
        };

        let Json(response) = handle_analyze(Json(request)).await.unwrap();
        assert_eq!(response.report.coverage.total_terms, 3);
        assert_eq!(response.report.coverage.matched_terms, 2);
        assert_eq!(response.report.coverage.score_percent, 67);
    }

    #[tokio::test]
    async fn test_analyze_accepts_empty_inputs() {
        let request = AnalyzeRequest {
            resume_text: String::new(),
            job_text: String::new(),
        };

        let Json(response) = handle_analyze(Json(request)).await.unwrap();
        assert_eq!(response.report.coverage.score_percent, 100);
        assert!(response.report.document.lines.is_empty());
    }
}
