//! Filler vocabulary excluded from candidate extraction.

/// Words that never become candidate terms.
///
/// Curated for resume and job-posting text: common English function words plus
/// the boilerplate that appears in nearly every posting ("experience",
/// "duties", "responsible") and would otherwise dominate the candidate list.
/// Must stay lowercase and sorted — membership checks binary-search it.
pub const STOP_WORDS: &[&str] = &[
    "activities",
    "all",
    "and",
    "are",
    "can",
    "duties",
    "essential",
    "experience",
    "for",
    "from",
    "functions",
    "general",
    "has",
    "have",
    "including",
    "job",
    "perform",
    "performing",
    "physical",
    "position",
    "required",
    "responsible",
    "skills",
    "statement",
    "that",
    "the",
    "this",
    "use",
    "will",
    "with",
    "you",
    "your",
];

/// True if `word` (already lowercased) is a stopword.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_is_sorted_and_lowercase() {
        for pair in STOP_WORDS.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
        for word in STOP_WORDS {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn test_common_fillers_are_stopwords() {
        assert!(is_stop_word("and"));
        assert!(is_stop_word("experience"));
        assert!(is_stop_word("responsible"));
        assert!(is_stop_word("your"));
    }

    #[test]
    fn test_skill_terms_are_not_stopwords() {
        assert!(!is_stop_word("python"));
        assert!(!is_stop_word("sql"));
        assert!(!is_stop_word("leadership"));
    }
}
