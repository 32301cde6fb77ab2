// Prompt constants for the generation endpoints.
// These are the product's fixed prompts — wording changes here change what
// users get back, so treat edits as behavior changes, not copy tweaks.

/// System prompt for the resume rewrite operation.
pub const OPTIMIZE_SYSTEM: &str = "You are an expert resume writer. \
    Rewrite resumes to match the job description while staying truthful. \
    Preserve formatting, bullets, and ATS-friendly structure.";

/// System prompt for cover letter generation.
pub const COVER_LETTER_SYSTEM: &str = "You are a professional cover letter writer. \
    Write concise, persuasive cover letters tailored to the job description.";

/// System prompt for improvement suggestions.
pub const IMPROVEMENTS_SYSTEM: &str = "You are a resume optimization expert. \
    Suggest actionable improvements, highlight missing keywords, and rewrite weak bullets.";

/// Task line appended to the shared user prompt, per operation.
pub const OPTIMIZE_INSTRUCTION: &str =
    "Rewrite the resume to maximize alignment with the job and professional tone.";
pub const COVER_LETTER_INSTRUCTION: &str = "Generate a targeted cover letter.";
pub const IMPROVEMENTS_INSTRUCTION: &str = "Provide improvement suggestions.";

/// Renders the user prompt shared by all three resume operations.
pub fn task_prompt(resume_text: &str, job_text: &str, instruction: &str) -> String {
    format!("Resume:\n{resume_text}\n\nJob Description:\n{job_text}\n\n{instruction}")
}
