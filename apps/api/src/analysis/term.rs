//! Term and TermSet — the vocabulary types the whole analysis pipeline moves around.

use std::collections::HashSet;

use serde::{Serialize, Serializer};

/// A single candidate vocabulary entry.
///
/// `surface` keeps the casing of the first occurrence; `key` is the lowercased
/// comparison form. Two terms are the same term iff their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    surface: String,
    key: String,
}

impl Term {
    pub fn new(surface: &str) -> Self {
        Self {
            surface: surface.to_string(),
            key: surface.to_lowercase(),
        }
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A set of terms deduplicated case-insensitively, iterated in first-insertion
/// order. The stable order is what makes extraction reproducible: the same
/// input pair always yields the same term sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermSet {
    terms: Vec<Term>,
    keys: HashSet<String>,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from surface forms, deduplicating case-insensitively.
    pub fn from_surfaces<'a, I>(surfaces: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::new();
        for surface in surfaces {
            set.insert(surface);
        }
        set
    }

    /// Inserts a surface form. Returns false if a term with the same
    /// comparison key is already present, or the surface is empty.
    pub fn insert(&mut self, surface: &str) -> bool {
        if surface.is_empty() {
            return false;
        }
        let term = Term::new(surface);
        if !self.keys.insert(term.key.clone()) {
            return false;
        }
        self.terms.push(term);
        true
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.keys.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    /// Surface forms in insertion order.
    pub fn surfaces(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(Term::surface)
    }
}

/// Serializes as the ordered list of surface forms — the shape API clients render.
impl Serialize for TermSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.surfaces())
    }
}
