//! Typo generation strategies
//!
//! Every strategy turns one label into an ordered list of candidates. The
//! suffix, when present, is reattached to each candidate by [`with_suffix`]
//! so all strategies produce the same shape of output.

mod doublehit;
mod omission;
mod repetition;
mod substitution;
mod transposition;
mod vowelswap;

pub use doublehit::{DoubleHit, DEFAULT_DOUBLE_HIT_LIMIT};
pub use omission::Omission;
pub use repetition::Repetition;
pub use substitution::TableSubstitution;
pub use transposition::Transposition;
pub use vowelswap::VowelSwap;

use crate::error::{Result, TypoError};
use crate::mapping::Locale;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Core trait for all mutation strategies
pub trait Strategy: Send + Sync {
    /// Strategy name as shown in results
    fn name(&self) -> &str;

    /// Generate candidates for `label`, reattaching `suffix` when not empty
    fn generate(&self, label: &str, suffix: &str) -> Result<Vec<String>>;
}

/// Shared handle to a strategy
pub type StrategyRef = Arc<dyn Strategy>;

/// Append the suffix to a generated label
pub fn with_suffix(candidate: String, suffix: &str) -> String {
    if suffix.is_empty() {
        candidate
    } else {
        format!("{}.{}", candidate, suffix)
    }
}

/// Built-in strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    DoubleHit,
    VowelSwap,
    Similar,
    Omission,
    Transposition,
    Repetition,
    Replace,
}

impl StrategyKind {
    /// All strategies in their default run order
    pub const ALL: [StrategyKind; 7] = [
        StrategyKind::DoubleHit,
        StrategyKind::VowelSwap,
        StrategyKind::Similar,
        StrategyKind::Omission,
        StrategyKind::Transposition,
        StrategyKind::Repetition,
        StrategyKind::Replace,
    ];

    /// Display name, also used as `FuzzResult::strategy_name`
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::DoubleHit => "DoubleHit",
            StrategyKind::VowelSwap => "VowelSwap",
            StrategyKind::Similar => "Similar",
            StrategyKind::Omission => "Omission",
            StrategyKind::Transposition => "Transposition",
            StrategyKind::Repetition => "Repetition",
            StrategyKind::Replace => "Replace",
        }
    }

    /// Instantiate the strategy for a locale
    pub fn build(&self, locale: &Locale, double_hit_limit: Option<usize>) -> StrategyRef {
        match self {
            StrategyKind::DoubleHit => {
                Arc::new(DoubleHit::new(locale).with_limit(double_hit_limit))
            }
            StrategyKind::VowelSwap => Arc::new(VowelSwap),
            StrategyKind::Similar => Arc::new(TableSubstitution::similar(locale)),
            StrategyKind::Omission => Arc::new(Omission),
            StrategyKind::Transposition => Arc::new(Transposition),
            StrategyKind::Repetition => Arc::new(Repetition),
            StrategyKind::Replace => Arc::new(TableSubstitution::replace(locale)),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = TypoError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace(['-', '_'], "").to_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name().to_lowercase() == wanted)
            .ok_or_else(|| {
                TypoError::config(format!(
                    "Unknown strategy: {}. Supported strategies: {}",
                    s,
                    available_strategies().join(", ")
                ))
            })
    }
}

/// Names of all built-in strategies
pub fn available_strategies() -> Vec<&'static str> {
    StrategyKind::ALL.iter().map(|kind| kind.name()).collect()
}

/// Build the given strategies for a locale, in order
pub fn build_all(
    kinds: &[StrategyKind],
    locale: &Locale,
    double_hit_limit: Option<usize>,
) -> Vec<Option<StrategyRef>> {
    kinds
        .iter()
        .map(|kind| Some(kind.build(locale, double_hit_limit)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping;

    #[test]
    fn test_with_suffix() {
        assert_eq!(with_suffix("zenithar".to_string(), ""), "zenithar");
        assert_eq!(with_suffix("zenithar".to_string(), "co.uk"), "zenithar.co.uk");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("vowelswap".parse::<StrategyKind>().unwrap(), StrategyKind::VowelSwap);
        assert_eq!("double-hit".parse::<StrategyKind>().unwrap(), StrategyKind::DoubleHit);
        assert_eq!("Replace".parse::<StrategyKind>().unwrap(), StrategyKind::Replace);
        assert!("bitsquatting".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_built_names_match_kinds() {
        let locale = mapping::english();
        for kind in StrategyKind::ALL {
            assert_eq!(kind.build(&locale, None).name(), kind.name());
        }
    }

    #[test]
    fn test_suffix_handling_is_uniform() {
        let locale = mapping::english();
        for kind in StrategyKind::ALL {
            let strategy = kind.build(&locale, None);
            let bare = strategy.generate("paypal", "").unwrap();
            let full = strategy.generate("paypal", "com").unwrap();

            assert_eq!(bare.len(), full.len(), "{}", kind);
            for (b, f) in bare.iter().zip(full.iter()) {
                assert_eq!(format!("{}.com", b), *f, "{}", kind);
            }
        }
    }
}
