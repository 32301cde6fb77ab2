//! Gap highlighting and coverage scoring.
//!
//! Renders a text with missing-term occurrences marked, line for line, and
//! derives the 0-100 coverage score with its invariants enforced.

use serde::Serialize;

use crate::analysis::matcher::TermMatcher;
use crate::analysis::term::TermSet;
use crate::analysis::AnalysisError;

/// One piece of a rendered line: untouched text or a marked term occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Fragment {
    Plain(String),
    Marked(String),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Plain(t) | Fragment::Marked(t) => t,
        }
    }
}

/// A single source line as an ordered fragment sequence.
/// Blank lines carry no fragments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightedLine {
    pub fragments: Vec<Fragment>,
}

/// The rendered document: one entry per source line, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightedDocument {
    pub lines: Vec<HighlightedLine>,
}

impl HighlightedDocument {
    /// Reassembles the unmarked source text. Highlighting never adds, drops,
    /// or reorders characters, so this is exact for every input.
    pub fn plain_text(&self) -> String {
        let lines: Vec<String> = self
            .lines
            .iter()
            .map(|line| line.fragments.iter().map(Fragment::text).collect())
            .collect();
        lines.join("\n")
    }
}

/// Coverage of the candidate vocabulary by the target text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageResult {
    pub total_terms: usize,
    pub matched_terms: usize,
    pub missing_terms: TermSet,
    pub score_percent: u32,
}

/// Renders `resume_text` with whole-word occurrences of `missing_terms` marked.
///
/// Lines are split on `\n` and preserved one to one, blank lines included.
/// An empty input yields an empty document; an empty term set yields every
/// line verbatim as a single plain fragment. Neither is an error.
pub fn highlight_missing(
    resume_text: &str,
    missing_terms: &TermSet,
) -> Result<HighlightedDocument, AnalysisError> {
    if resume_text.is_empty() {
        return Ok(HighlightedDocument { lines: Vec::new() });
    }

    let matcher = TermMatcher::new(missing_terms)?;
    let lines = resume_text
        .split('\n')
        .map(|line| highlight_line(line, &matcher))
        .collect();

    Ok(HighlightedDocument { lines })
}

fn highlight_line(line: &str, matcher: &TermMatcher) -> HighlightedLine {
    let mut fragments = Vec::new();
    let mut cursor = 0;

    for span in matcher.select_spans(line) {
        if span.start > cursor {
            fragments.push(Fragment::Plain(line[cursor..span.start].to_string()));
        }
        fragments.push(Fragment::Marked(line[span.start..span.end].to_string()));
        cursor = span.end;
    }
    if cursor < line.len() {
        fragments.push(Fragment::Plain(line[cursor..].to_string()));
    }

    HighlightedLine { fragments }
}

/// Derives the coverage score from the candidate total and the missing set.
///
/// `matched_terms + |missing_terms| == total_terms` holds in every result.
/// An empty candidate vocabulary scores 100: nothing was asked for, so
/// nothing is lacking.
pub fn compute_coverage(
    total_candidate_count: usize,
    missing_terms: TermSet,
) -> Result<CoverageResult, AnalysisError> {
    if missing_terms.len() > total_candidate_count {
        return Err(AnalysisError::MissingExceedsTotal {
            missing: missing_terms.len(),
            total: total_candidate_count,
        });
    }

    let matched_terms = total_candidate_count - missing_terms.len();
    let score_percent = if total_candidate_count == 0 {
        100
    } else {
        ((matched_terms as f64 / total_candidate_count as f64) * 100.0).round() as u32
    };

    Ok(CoverageResult {
        total_terms: total_candidate_count,
        matched_terms,
        missing_terms,
        score_percent,
    })
}
