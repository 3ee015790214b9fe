//! Adjacent character transposition

use super::{with_suffix, Strategy};
use crate::error::Result;

/// Swaps each pair of neighbouring characters
#[derive(Debug, Clone, Copy, Default)]
pub struct Transposition;

impl Strategy for Transposition {
    fn name(&self) -> &str {
        "Transposition"
    }

    fn generate(&self, label: &str, suffix: &str) -> Result<Vec<String>> {
        let chars: Vec<char> = label.chars().collect();

        let candidates = (0..chars.len().saturating_sub(1))
            .map(|i| {
                let mut swapped = chars.clone();
                swapped.swap(i, i + 1);
                with_suffix(swapped.into_iter().collect(), suffix)
            })
            .collect();

        Ok(candidates)
    }
}
