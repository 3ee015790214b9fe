//! Core types and structures for typogenerator

use crate::error::{Result, TypoError};
use crate::mapping::ENGLISH;
use crate::strategy::{StrategyKind, DEFAULT_DOUBLE_HIT_LIMIT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Permutations produced by one strategy for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzResult {
    #[serde(rename = "name")]
    pub strategy_name: String,
    #[serde(rename = "domain")]
    pub original_label: String,
    pub permutations: Vec<String>,
}

impl FuzzResult {
    pub fn new(
        strategy_name: impl Into<String>,
        original_label: impl Into<String>,
        permutations: Vec<String>,
    ) -> Self {
        Self {
            strategy_name: strategy_name.into(),
            original_label: original_label.into(),
            permutations,
        }
    }

    pub fn len(&self) -> usize {
        self.permutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permutations.is_empty()
    }
}

/// JSON envelope for a complete fuzz run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzReport {
    pub input: String,
    pub suffix: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub results: Vec<FuzzResult>,
}

impl FuzzReport {
    /// Total number of permutations over all strategies
    pub fn total_permutations(&self) -> usize {
        self.results.iter().map(FuzzResult::len).sum()
    }
}

/// Output format for the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One permutation per line
    #[default]
    Plain,
    /// Quoted CSV with strategy, domain, permutation and IDNA columns
    Csv,
    /// Pretty-printed JSON report
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TypoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(TypoError::config(format!(
                "Unknown output format: {}. Supported formats: plain, csv, json",
                other
            ))),
        }
    }
}

/// Configuration for a fuzz run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzConfig {
    /// Locale whose mapping tables feed the table-driven strategies
    pub locale: String,
    /// Strategies to run, in order
    pub strategies: Vec<StrategyKind>,
    /// Cap on DoubleHit output, `None` for unlimited
    pub double_hit_limit: Option<usize>,
    /// Run strategies on the blocking thread pool
    pub concurrent: bool,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            locale: ENGLISH.to_string(),
            strategies: StrategyKind::ALL.to_vec(),
            double_hit_limit: Some(DEFAULT_DOUBLE_HIT_LIMIT),
            concurrent: false,
        }
    }
}

impl FuzzConfig {
    /// Defaults overridden by `TYPOGEN_*` environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(locale) = env::var("TYPOGEN_LOCALE") {
            config.locale = locale.trim().to_lowercase();
        }

        if let Ok(list) = env::var("TYPOGEN_STRATEGIES") {
            config.strategies = parse_strategy_list(&list)?;
        }

        if let Ok(limit) = env::var("TYPOGEN_DOUBLE_HIT_LIMIT") {
            let limit: usize = limit.trim().parse().map_err(|_| {
                crate::config_error!("TYPOGEN_DOUBLE_HIT_LIMIT must be a number, got '{}'", limit)
            })?;
            config.double_hit_limit = (limit > 0).then_some(limit);
        }

        if let Ok(flag) = env::var("TYPOGEN_CONCURRENT") {
            config.concurrent = parse_bool(&flag).ok_or_else(|| {
                crate::config_error!("TYPOGEN_CONCURRENT must be true or false, got '{}'", flag)
            })?;
        }

        Ok(config)
    }
}

/// Parse a comma-separated strategy list such as `omission,vowelswap`
pub fn parse_strategy_list(list: &str) -> Result<Vec<StrategyKind>> {
    let kinds = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(StrategyKind::from_str)
        .collect::<Result<Vec<_>>>()?;

    if kinds.is_empty() {
        return Err(TypoError::config("Strategy list is empty"));
    }
    Ok(kinds)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
