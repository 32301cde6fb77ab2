//! Whole-word multi-term matching.
//!
//! Built on a compiled Aho-Corasick automaton with an explicit selection pass
//! instead of a single alternation pattern, so the longest-match preference is
//! a stated rule rather than an artifact of pattern order.

use std::collections::HashSet;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::analysis::extractor::is_word_char;
use crate::analysis::term::TermSet;
use crate::analysis::AnalysisError;

/// One selected whole-word occurrence, as byte offsets into the haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// Case-insensitive whole-word matcher over a fixed term set.
pub struct TermMatcher {
    automaton: AhoCorasick,
}

impl TermMatcher {
    /// Compiles the automaton. Patterns keep the set's iteration order, so
    /// pattern ids line up with term indices.
    pub fn new(terms: &TermSet) -> Result<Self, AnalysisError> {
        let patterns: Vec<&str> = terms.surfaces().collect();
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| AnalysisError::MatcherBuild(e.to_string()))?;
        Ok(Self { automaton })
    }

    /// Non-overlapping whole-word occurrences in `line`, leftmost first.
    /// Where several terms begin at the same position, the longest wins.
    pub fn select_spans(&self, line: &str) -> Vec<MatchSpan> {
        let mut hits = self.bounded_hits(line);
        // Leftmost first; at equal starts, longest first.
        hits.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(&a.1)));

        let mut spans = Vec::new();
        let mut cursor = 0;
        for (start, end, _) in hits {
            if start >= cursor {
                spans.push(MatchSpan { start, end });
                cursor = end;
            }
        }
        spans
    }

    /// Indices of terms with at least one whole-word occurrence in `text`.
    pub fn matched_terms(&self, text: &str) -> HashSet<usize> {
        self.bounded_hits(text)
            .into_iter()
            .map(|(_, _, term)| term)
            .collect()
    }

    /// Every occurrence (overlapping ones included) that passes the boundary
    /// test, as (start, end, term index) triples.
    ///
    /// Overlapping enumeration matters: with a plain leftmost-longest scan, a
    /// boundary-rejected long match would shadow a boundary-valid shorter one
    /// starting at the same position.
    fn bounded_hits(&self, text: &str) -> Vec<(usize, usize, usize)> {
        self.automaton
            .find_overlapping_iter(text)
            .filter(|m| is_word_bounded(text, m.start(), m.end()))
            .map(|m| (m.start(), m.end(), m.pattern().as_usize()))
            .collect()
    }
}

/// True when `text[start..end]` does not abut a word character on either side.
/// Patterns are well-formed UTF-8, so match offsets always land on char
/// boundaries and the slicing below cannot split a code point.
fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let clear_before = text[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
    let clear_after = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
    clear_before && clear_after
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(surfaces: &[&str]) -> TermMatcher {
        TermMatcher::new(&TermSet::from_surfaces(surfaces.iter().copied())).unwrap()
    }

    fn marked<'a>(m: &TermMatcher, line: &'a str) -> Vec<&'a str> {
        m.select_spans(line)
            .into_iter()
            .map(|s| &line[s.start..s.end])
            .collect()
    }

    #[test]
    fn test_no_match_inside_a_longer_word() {
        let m = matcher(&["code"]);
        assert!(marked(&m, "encoded the message").is_empty());
    }

    #[test]
    fn test_whole_word_occurrence_matches() {
        let m = matcher(&["code"]);
        assert_eq!(marked(&m, "the code works"), vec!["code"]);
    }

    #[test]
    fn test_prefix_term_does_not_split_the_longer_word() {
        // "test" alone cannot match inside "testing"; the full word is marked once.
        let m = matcher(&["test", "testing"]);
        assert_eq!(marked(&m, "unit testing matters"), vec!["testing"]);
    }

    #[test]
    fn test_longest_term_wins_at_equal_start() {
        let m = matcher(&["machine", "machine learning"]);
        assert_eq!(marked(&m, "machine learning engineer"), vec!["machine learning"]);
    }

    #[test]
    fn test_matching_is_case_insensitive_and_keeps_source_casing() {
        let m = matcher(&["sql"]);
        assert_eq!(marked(&m, "Uses SQL daily"), vec!["SQL"]);
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        let m = matcher(&["python"]);
        assert_eq!(marked(&m, "(Python, mostly)"), vec!["Python"]);
    }

    #[test]
    fn test_hyphen_is_a_boundary() {
        let m = matcher(&["well"]);
        assert_eq!(marked(&m, "well-known tools"), vec!["well"]);
    }

    #[test]
    fn test_underscore_is_not_a_boundary() {
        let m = matcher(&["code"]);
        assert!(marked(&m, "code_review notes").is_empty());
    }

    #[test]
    fn test_term_at_line_start_and_end() {
        let m = matcher(&["rust"]);
        assert_eq!(marked(&m, "Rust all the way to rust"), vec!["Rust", "rust"]);
    }

    #[test]
    fn test_selected_spans_do_not_overlap() {
        let m = matcher(&["java", "javascript"]);
        let line = "javascript and java";
        let spans = m.select_spans(line);
        assert_eq!(marked(&m, line), vec!["javascript", "java"]);
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_matched_terms_reports_indices_in_set_order() {
        let set = TermSet::from_surfaces(["python", "sql", "docker"]);
        let m = TermMatcher::new(&set).unwrap();
        let matched = m.matched_terms("Python here, Docker there");
        assert!(matched.contains(&0));
        assert!(!matched.contains(&1));
        assert!(matched.contains(&2));
    }

    #[test]
    fn test_matched_terms_sees_across_lines() {
        let m = matcher(&["sql"]);
        let matched = m.matched_terms("first line\nSQL on the second");
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_empty_term_set_matches_nothing() {
        let m = matcher(&[]);
        assert!(marked(&m, "anything at all").is_empty());
        assert!(m.matched_terms("anything at all").is_empty());
    }

    #[test]
    fn test_non_ascii_neighbours_are_boundaries() {
        let m = matcher(&["cafe"]);
        assert_eq!(marked(&m, "ça? cafe déjà"), vec!["cafe"]);
    }
}
