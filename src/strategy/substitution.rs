//! Table-driven substitution
//!
//! Shared by `Similar` (homoglyph table), `Replace` (keyboard table) and the
//! inner step of `DoubleHit`.

use super::{with_suffix, Strategy};
use crate::error::Result;
use crate::mapping::{Locale, Mapping};
use std::sync::Arc;

/// A mapping key found in the label
#[derive(Debug, Clone, Copy)]
pub(crate) struct Match<'m> {
    /// Start position in characters
    pub start: usize,
    /// Matched length in characters
    pub len: usize,
    pub replacements: &'m [String],
}

impl Match<'_> {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Longest match at every position of `chars`, in ascending order
pub(crate) fn find_matches<'m>(mapping: &'m Mapping, chars: &[char]) -> Vec<Match<'m>> {
    (0..chars.len())
        .filter_map(|start| {
            mapping
                .longest_match(chars, start)
                .map(|(len, replacements)| Match {
                    start,
                    len,
                    replacements,
                })
        })
        .collect()
}

/// Substitutes every mapped span of the label with each of its replacements
#[derive(Debug, Clone)]
pub struct TableSubstitution {
    name: &'static str,
    mapping: Arc<Mapping>,
}

impl TableSubstitution {
    /// Substitution over an arbitrary table
    pub fn new(name: &'static str, mapping: Arc<Mapping>) -> Self {
        Self { name, mapping }
    }

    /// Homoglyph substitution for a locale
    pub fn similar(locale: &Locale) -> Self {
        Self::new("Similar", locale.similar())
    }

    /// Adjacent-key substitution for a locale
    pub fn replace(locale: &Locale) -> Self {
        Self::new("Replace", locale.keyboard())
    }
}

impl Strategy for TableSubstitution {
    fn name(&self) -> &str {
        self.name
    }

    fn generate(&self, label: &str, suffix: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = label.chars().collect();
        let mut candidates = Vec::new();

        for m in find_matches(&self.mapping, &chars) {
            let head: String = chars[..m.start].iter().collect();
            let tail: String = chars[m.end()..].iter().collect();

            for replacement in m.replacements {
                let candidate = format!("{}{}{}", head, replacement, tail);
                candidates.push(with_suffix(candidate, suffix));
            }
        }

        Ok(candidates)
    }
}
