// Generation endpoints: resume rewrite, cover letter, improvement suggestions,
// plus the raw chat pass-through.
// All model calls go through llm_client — no direct inference HTTP here.

pub mod handlers;
