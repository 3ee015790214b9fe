//! Compound substitution at two positions
//!
//! Both substitutions are applied to the original label; a candidate never
//! feeds into another substitution.

use super::substitution::{find_matches, Match};
use super::{with_suffix, Strategy};
use crate::error::Result;
use crate::mapping::{Locale, Mapping};
use std::sync::Arc;

/// Default cap on generated candidates
pub const DEFAULT_DOUBLE_HIT_LIMIT: usize = 10_000;

/// Substitutes two non-overlapping mapped spans at once
#[derive(Debug, Clone)]
pub struct DoubleHit {
    mapping: Arc<Mapping>,
    limit: Option<usize>,
}

impl DoubleHit {
    /// Keyboard double hit for a locale, capped at [`DEFAULT_DOUBLE_HIT_LIMIT`]
    pub fn new(locale: &Locale) -> Self {
        Self::with_mapping(locale.keyboard())
    }

    pub fn with_mapping(mapping: Arc<Mapping>) -> Self {
        Self {
            mapping,
            limit: Some(DEFAULT_DOUBLE_HIT_LIMIT),
        }
    }

    /// Set the candidate cap; `None` or `Some(0)` disables it
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.filter(|&n| n > 0);
        self
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn compose(chars: &[char], first: &Match<'_>, a: &str, second: &Match<'_>, b: &str) -> String {
        let mut out = String::with_capacity(chars.len() + a.len() + b.len());
        out.extend(&chars[..first.start]);
        out.push_str(a);
        out.extend(&chars[first.end()..second.start]);
        out.push_str(b);
        out.extend(&chars[second.end()..]);
        out
    }
}

impl Strategy for DoubleHit {
    fn name(&self) -> &str {
        "DoubleHit"
    }

    fn generate(&self, label: &str, suffix: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = label.chars().collect();
        let matches = find_matches(&self.mapping, &chars);
        let limit = self.limit.unwrap_or(usize::MAX);
        let mut candidates = Vec::new();

        for (i, first) in matches.iter().enumerate() {
            // Matches are sorted by start, so every later span that begins
            // past this one's end is a valid partner
            for second in matches[i + 1..].iter().filter(|m| m.start >= first.end()) {
                for a in first.replacements {
                    for b in second.replacements {
                        if candidates.len() >= limit {
                            tracing::warn!(
                                label = %label,
                                limit = limit,
                                "DoubleHit output truncated"
                            );
                            return Ok(candidates);
                        }
                        let candidate = Self::compose(&chars, first, a, second, b);
                        candidates.push(with_suffix(candidate, suffix));
                    }
                }
            }
        }

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping;

    fn table(entries: Vec<(&str, Vec<&str>)>) -> Arc<Mapping> {
        Arc::new(Mapping::new("test", entries).unwrap())
    }

    #[test]
    fn test_double_hit_pairs() {
        let strategy = DoubleHit::with_mapping(table(vec![("a", vec!["4"]), ("o", vec!["0"])]));
        let out = strategy.generate("aoa", "").unwrap();
        // pairs (0,1), (0,2), (1,2)
        assert_eq!(out, vec!["40a", "4o4", "a04"]);
    }

    #[test]
    fn test_double_hit_combinations() {
        let strategy = DoubleHit::with_mapping(table(vec![
            ("a", vec!["4", "@"]),
            ("b", vec!["8", "6", "d"]),
        ]));
        let out = strategy.generate("ab", "io").unwrap();
        assert_eq!(out.len(), 6);
        assert_eq!(out[0], "48.io");
        assert_eq!(out[5], "@d.io");
    }

    #[test]
    fn test_double_hit_skips_overlapping_spans() {
        let strategy = DoubleHit::with_mapping(table(vec![
            ("rn", vec!["m"]),
            ("n", vec!["h"]),
            ("a", vec!["4"]),
        ]));
        // matches: a@1, rn@2..4, n@3; (rn, n) overlap
        let out = strategy.generate("barn", "").unwrap();
        assert_eq!(out, vec!["b4m", "b4rh"]);
    }

    #[test]
    fn test_double_hit_single_match_is_empty() {
        let strategy = DoubleHit::with_mapping(table(vec![("z", vec!["s"])]));
        assert!(strategy.generate("zoo", "").unwrap().is_empty());
    }

    #[test]
    fn test_double_hit_limit() {
        let locale = mapping::english();
        let unlimited = DoubleHit::new(&locale).with_limit(None).generate("keyboard", "").unwrap();
        assert!(unlimited.len() > 10);

        let capped = DoubleHit::new(&locale).with_limit(Some(10)).generate("keyboard", "").unwrap();
        assert_eq!(capped, unlimited[..10].to_vec());
    }

    #[test]
    fn test_zero_limit_means_unlimited() {
        let strategy = DoubleHit::new(&mapping::english()).with_limit(Some(0));
        assert_eq!(strategy.limit(), None);
    }
}
