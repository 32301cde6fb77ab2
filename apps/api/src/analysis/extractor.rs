//! Candidate term extraction from a resume / job-description pair.

use crate::analysis::stopwords::is_stop_word;
use crate::analysis::term::TermSet;

/// Extracts the deduplicated candidate term set from both texts.
///
/// Tokens are maximal runs of word characters. A token survives only if it is
/// longer than two characters, consists of letters (hyphens would be accepted
/// too) and nothing else, and its lowercase form is not a stopword. The resume
/// is scanned before the job text, so the first occurrence fixes both the
/// surface casing and the position in the result's iteration order.
///
/// Pure function: no I/O, no mutation of inputs.
pub fn extract_terms(resume_text: &str, job_text: &str) -> TermSet {
    let mut terms = TermSet::new();
    for token in tokenize(resume_text).chain(tokenize(job_text)) {
        if is_candidate(token) {
            terms.insert(token);
        }
    }
    terms
}

/// Splits text into maximal word-character runs. Everything that is not a
/// word character is a delimiter and is discarded.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c)).filter(|t| !t.is_empty())
}

/// Word characters: ASCII alphanumerics and underscore. Shared with the
/// matcher's boundary test so "inside a word" means the same thing everywhere.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Shape and stopword filter for a single token.
///
/// The accepted character class is deliberately narrower than the tokenizer's:
/// digits and underscores form tokens but never candidates, while hyphens
/// would pass this filter even though the tokenizer splits on them.
fn is_candidate(token: &str) -> bool {
    token.len() > 2
        && token.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
        && !is_stop_word(&token.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_skill_terms_and_drops_fillers() {
        let resume = "Python developer";
        let job = "Looking for a Python and SQL developer with experience";
        let terms = extract_terms(resume, job);

        assert!(terms.contains("python"));
        assert!(terms.contains("developer"));
        assert!(terms.contains("sql"));
        // stopwords
        assert!(!terms.contains("and"));
        assert!(!terms.contains("for"));
        assert!(!terms.contains("with"));
        assert!(!terms.contains("experience"));
        // too short
        assert!(!terms.contains("a"));
    }

    #[test]
    fn test_resume_occurrence_fixes_surface_and_order() {
        let terms = extract_terms("Python developer", "Looking for a Python and SQL developer");
        let surfaces: Vec<&str> = terms.surfaces().collect();
        assert_eq!(surfaces, vec!["Python", "developer", "Looking", "SQL"]);
    }

    #[test]
    fn test_first_seen_casing_wins_across_texts() {
        let terms = extract_terms("PYTHON expert", "python needed");
        let surfaces: Vec<&str> = terms.surfaces().collect();
        assert_eq!(surfaces, vec!["PYTHON", "expert", "needed"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let resume = "Rust services, Kafka pipelines";
        let job = "Rust and Kafka. Kubernetes a plus";
        let first = extract_terms(resume, job);
        let second = extract_terms(resume, job);
        assert_eq!(first, second);
        let a: Vec<&str> = first.surfaces().collect();
        let b: Vec<&str> = second.surfaces().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tokens_with_digits_or_underscores_are_discarded() {
        let terms = extract_terms("web3 snake_case c99 Python", "");
        let surfaces: Vec<&str> = terms.surfaces().collect();
        assert_eq!(surfaces, vec!["Python"]);
    }

    #[test]
    fn test_hyphenated_phrases_split_at_the_hyphen() {
        // The tokenizer treats '-' as a delimiter, so no hyphenated token can
        // reach the filter even though the filter itself would accept one.
        let terms = extract_terms("state-of-the-art tooling", "");
        assert!(!terms.contains("state-of-the-art"));
        assert!(terms.contains("state"));
        assert!(terms.contains("art"));
        assert!(terms.contains("tooling"));
    }

    #[test]
    fn test_short_tokens_are_dropped() {
        let terms = extract_terms("Go is ok", "");
        assert!(terms.is_empty());
    }

    #[test]
    fn test_empty_inputs_yield_empty_set() {
        assert!(extract_terms("", "").is_empty());
    }

    #[test]
    fn test_every_extracted_term_satisfies_the_filters() {
        let resume = "Senior Rust engineer; built gRPC services, 7 years. low-latency work";
        let job = "We need Rust, gRPC, and SQL experience. On-call duties included.";
        for term in extract_terms(resume, job).iter() {
            let surface = term.surface();
            assert!(surface.len() > 2, "{surface} too short");
            assert!(
                surface.chars().all(|c| c.is_ascii_alphabetic() || c == '-'),
                "{surface} has a bad character"
            );
            assert!(!is_stop_word(term.key()), "{surface} is a stopword");
        }
    }

    #[test]
    fn test_punctuation_and_whitespace_delimit_tokens() {
        let terms = extract_terms("Python,SQL;Docker\nKafka\tRedis", "");
        let surfaces: Vec<&str> = terms.surfaces().collect();
        assert_eq!(surfaces, vec!["Python", "SQL", "Docker", "Kafka", "Redis"]);
    }
}
