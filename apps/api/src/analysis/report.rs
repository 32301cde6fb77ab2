//! The full gap analysis pipeline: extract, partition, highlight, score.

use serde::Serialize;

use crate::analysis::extractor::extract_terms;
use crate::analysis::highlighter::{
    compute_coverage, highlight_missing, CoverageResult, HighlightedDocument,
};
use crate::analysis::matcher::TermMatcher;
use crate::analysis::term::TermSet;
use crate::analysis::AnalysisError;

/// Everything the presentation layer needs to render one analysis:
/// the candidate vocabulary, the coverage numbers with the missing terms,
/// and the line-preserving rendered document.
#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    pub candidate_terms: TermSet,
    pub coverage: CoverageResult,
    pub document: HighlightedDocument,
}

/// Standard flow: candidates from the resume/job pair, measured against the
/// resume itself.
pub fn analyze_resume(resume_text: &str, job_text: &str) -> Result<GapReport, AnalysisError> {
    compute_gap_report(resume_text, extract_terms(resume_text, job_text))
}

/// Measures how well `target_text` covers `candidates` and renders the gaps.
///
/// A candidate counts as present only when it has a whole-word occurrence in
/// the target — the same rule the highlighter marks by — so the score, the
/// missing list, and the marks all agree on what "appears in the text" means.
/// The optimize flow calls this directly with candidates from the original
/// resume/job pair and the model's rewrite as the target.
pub fn compute_gap_report(
    target_text: &str,
    candidates: TermSet,
) -> Result<GapReport, AnalysisError> {
    let matcher = TermMatcher::new(&candidates)?;
    let present = matcher.matched_terms(target_text);

    let missing = TermSet::from_surfaces(
        candidates
            .iter()
            .enumerate()
            .filter(|(index, _)| !present.contains(index))
            .map(|(_, term)| term.surface()),
    );

    let document = highlight_missing(target_text, &missing)?;
    let coverage = compute_coverage(candidates.len(), missing)?;

    Ok(GapReport {
        candidate_terms: candidates,
        coverage,
        document,
    })
}
