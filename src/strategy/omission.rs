//! Character omission: drop one character at a time

use super::{with_suffix, Strategy};
use crate::error::Result;

/// Removes the character at each position in turn
#[derive(Debug, Clone, Copy, Default)]
pub struct Omission;

impl Strategy for Omission {
    fn name(&self) -> &str {
        "Omission"
    }

    fn generate(&self, label: &str, suffix: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = label.chars().collect();

        let candidates = (0..chars.len())
            .map(|i| {
                let candidate: String = chars[..i].iter().chain(&chars[i + 1..]).collect();
                with_suffix(candidate, suffix)
            })
            .collect();

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omission_order() {
        let out = Omission.generate("abc", "").unwrap();
        assert_eq!(out, vec!["bc", "ac", "ab"]);
    }

    #[test]
    fn test_omission_keeps_duplicates() {
        // Removing either 'o' yields the same string; both are kept
        let out = Omission.generate("goo", "").unwrap();
        assert_eq!(out, vec!["oo", "go", "go"]);
    }

    #[test]
    fn test_omission_multibyte() {
        let out = Omission.generate("café", "fr").unwrap();
        assert_eq!(out, vec!["afé.fr", "cfé.fr", "caé.fr", "caf.fr"]);
    }

    #[test]
    fn test_omission_empty_label() {
        assert!(Omission.generate("", "").unwrap().is_empty());
    }
}
