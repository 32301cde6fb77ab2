// Keyword gap analysis core.
// Implements: term extraction, whole-word gap matching, highlighting, coverage scoring.
// Pure and deterministic. No I/O, no shared state; each call stands alone.

use thiserror::Error;

pub mod extractor;
pub mod handlers;
pub mod highlighter;
pub mod matcher;
pub mod report;
pub mod stopwords;
pub mod term;

/// Errors raised by the analysis core.
/// Returned directly to the caller — never wrapped, never logged here.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// The caller supplied more missing terms than candidates. An invariant
    /// breach on the caller's side, not a degenerate input.
    #[error("missing term count {missing} exceeds candidate total {total}")]
    MissingExceedsTotal { missing: usize, total: usize },

    /// Multi-pattern automaton construction failed. Not reachable for term
    /// sets the extractor produces; kept so nothing in this module panics.
    #[error("failed to build term matcher: {0}")]
    MatcherBuild(String),
}
