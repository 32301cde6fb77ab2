//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::extractor::extract_terms;
use crate::analysis::report::{compute_gap_report, GapReport};
use crate::errors::AppError;
use crate::llm_client::prompts::{
    task_prompt, COVER_LETTER_INSTRUCTION, COVER_LETTER_SYSTEM, IMPROVEMENTS_INSTRUCTION,
    IMPROVEMENTS_SYSTEM, OPTIMIZE_INSTRUCTION, OPTIMIZE_SYSTEM,
};
use crate::llm_client::ChatMessage;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Shared request body for the three resume operations.
#[derive(Debug, Deserialize)]
pub struct ResumeJobRequest {
    pub resume_text: String,
    pub job_text: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub text: String,
    pub report: GapReport,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub messages: Vec<ChatMessage>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/optimize
///
/// Rewrites the resume against the job description, then re-runs the gap
/// analysis on the rewritten text: candidates come from the original pair,
/// coverage is measured on the rewrite, so the caller sees what the rewrite
/// still lacks.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<ResumeJobRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    require_pair(&request)?;

    let messages = vec![
        ChatMessage::system(OPTIMIZE_SYSTEM),
        ChatMessage::user(task_prompt(
            &request.resume_text,
            &request.job_text,
            OPTIMIZE_INSTRUCTION,
        )),
    ];
    let text = state.generator.generate(&messages).await?;

    let candidates = extract_terms(&request.resume_text, &request.job_text);
    let report = compute_gap_report(&text, candidates)?;

    Ok(Json(OptimizeResponse { text, report }))
}

/// POST /api/v1/cover-letter
///
/// Generates a cover letter for the resume/job pair.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<ResumeJobRequest>,
) -> Result<Json<TextResponse>, AppError> {
    require_pair(&request)?;

    let messages = vec![
        ChatMessage::system(COVER_LETTER_SYSTEM),
        ChatMessage::user(task_prompt(
            &request.resume_text,
            &request.job_text,
            COVER_LETTER_INSTRUCTION,
        )),
    ];
    let text = state.generator.generate(&messages).await?;

    Ok(Json(TextResponse { text }))
}

/// POST /api/v1/improvements
///
/// Returns improvement suggestions for the resume against the job.
pub async fn handle_improvements(
    State(state): State<AppState>,
    Json(request): Json<ResumeJobRequest>,
) -> Result<Json<TextResponse>, AppError> {
    require_pair(&request)?;

    let messages = vec![
        ChatMessage::system(IMPROVEMENTS_SYSTEM),
        ChatMessage::user(task_prompt(
            &request.resume_text,
            &request.job_text,
            IMPROVEMENTS_INSTRUCTION,
        )),
    ];
    let text = state.generator.generate(&messages).await?;

    Ok(Json(TextResponse { text }))
}

/// POST /api/v1/generate
///
/// Raw pass-through to the hosted model: forwards the message list untouched
/// and returns the reply text. The endpoints above are the shaped front
/// doors; this one serves clients that assemble their own prompts.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<TextResponse>, AppError> {
    if request.messages.is_empty() {
        return Err(AppError::Validation("messages cannot be empty".to_string()));
    }

    let text = state.generator.generate(&request.messages).await?;

    Ok(Json(TextResponse { text }))
}

fn require_pair(request: &ResumeJobRequest) -> Result<(), AppError> {
    if request.resume_text.trim().is_empty() || request.job_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text and job_text are both required".to_string(),
        ));
    }
    Ok(())
}
