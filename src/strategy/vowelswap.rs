//! Vowel substitution
//!
//! `y` is treated as a vowel: it is swapped for, and replaced by, the five
//! classic vowels. Case follows the character being replaced.

use super::{with_suffix, Strategy};
use crate::error::Result;

/// Vowel alphabet used for substitution
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Replaces every vowel with each of the other vowels
#[derive(Debug, Clone, Copy, Default)]
pub struct VowelSwap;

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

impl Strategy for VowelSwap {
    fn name(&self) -> &str {
        "VowelSwap"
    }

    fn generate(&self, label: &str, suffix: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = label.chars().collect();
        let mut candidates = Vec::new();

        for (i, &original) in chars.iter().enumerate() {
            if !is_vowel(original) {
                continue;
            }

            let lowered = original.to_ascii_lowercase();
            let upper = original.is_ascii_uppercase();

            for &vowel in VOWELS.iter().filter(|&&v| v != lowered) {
                let replacement = if upper { vowel.to_ascii_uppercase() } else { vowel };

                let mut swapped = chars.clone();
                swapped[i] = replacement;
                candidates.push(with_suffix(swapped.into_iter().collect(), suffix));
            }
        }

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowelswap_count() {
        let out = VowelSwap.generate("zenithar", "").unwrap();
        assert_eq!(out.len(), 15);
        assert!(out.iter().all(|c| c != "zenithar"));
    }

    #[test]
    fn test_vowelswap_single_vowel() {
        let out = VowelSwap.generate("bat", "").unwrap();
        assert_eq!(out, vec!["bet", "bit", "bot", "but", "byt"]);
    }

    #[test]
    fn test_vowelswap_uppercase() {
        let out = VowelSwap.generate("bOx", "").unwrap();
        assert_eq!(out, vec!["bAx", "bEx", "bIx", "bUx", "bYx"]);
    }

    #[test]
    fn test_vowelswap_no_vowels() {
        assert!(VowelSwap.generate("xkcd", "com").unwrap().is_empty());
    }

    #[test]
    fn test_vowelswap_accented_letters_are_not_vowels() {
        assert!(VowelSwap.generate("ç", "").unwrap().is_empty());
        let out = VowelSwap.generate("éa", "").unwrap();
        assert!(out.iter().all(|c| c.starts_with('é')));
        assert_eq!(out.len(), 5);
    }
}
