//! Character repetition: type one key twice

use super::{with_suffix, Strategy};
use crate::error::Result;

/// Duplicates the character at each position in turn
#[derive(Debug, Clone, Copy, Default)]
pub struct Repetition;

impl Strategy for Repetition {
    fn name(&self) -> &str {
        "Repetition"
    }

    fn generate(&self, label: &str, suffix: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = label.chars().collect();

        let candidates = (0..chars.len())
            .map(|i| {
                let candidate: String = chars[..=i].iter().chain(&chars[i..]).collect();
                with_suffix(candidate, suffix)
            })
            .collect();

        Ok(candidates)
    }
}
