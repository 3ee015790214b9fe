//! Fuzz orchestrator
//!
//! Runs a list of strategies over one label and collects a [`FuzzResult`] per
//! strategy. The first failing strategy aborts the run and its error is
//! returned; results gathered before the failure are discarded.

use crate::domain::DomainSplitter;
use crate::error::{Result, TypoError};
use crate::mapping;
use crate::strategy::{build_all, StrategyRef};
use crate::types::{FuzzConfig, FuzzResult};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;

/// Run `strategies` over `label` in order, skipping `None` entries
pub fn fuzz(label: &str, suffix: &str, strategies: &[Option<StrategyRef>]) -> Result<Vec<FuzzResult>> {
    let start_time = Instant::now();
    let mut results = Vec::with_capacity(strategies.len());

    for strategy in strategies.iter().flatten() {
        let strategy_start = Instant::now();

        let permutations = strategy.generate(label, suffix).map_err(|e| {
            tracing::warn!(
                strategy = %strategy.name(),
                label = %label,
                error = %e,
                "Strategy failed, aborting fuzz run"
            );
            e
        })?;

        tracing::debug!(
            strategy = %strategy.name(),
            permutations = %permutations.len(),
            duration_us = %strategy_start.elapsed().as_micros(),
            "Strategy completed"
        );

        results.push(FuzzResult::new(strategy.name(), label, permutations));
    }

    log_summary(label, &results, start_time);
    Ok(results)
}

/// Concurrent variant of [`fuzz`]: one blocking task per strategy.
///
/// Results keep the order of `strategies`. When several strategies fail, the
/// error of the first one in list order is returned.
pub async fn fuzz_concurrent(
    label: &str,
    suffix: &str,
    strategies: &[Option<StrategyRef>],
) -> Result<Vec<FuzzResult>> {
    let start_time = Instant::now();

    let tasks = strategies.iter().flatten().map(|strategy| {
        let strategy = Arc::clone(strategy);
        let label = label.to_string();
        let suffix = suffix.to_string();

        tokio::task::spawn_blocking(move || {
            let permutations = strategy.generate(&label, &suffix)?;
            Ok::<_, TypoError>(FuzzResult::new(strategy.name(), label, permutations))
        })
    });

    let mut results = Vec::with_capacity(strategies.len());
    for joined in join_all(tasks).await {
        match joined? {
            Ok(result) => results.push(result),
            Err(e) => {
                tracing::warn!(label = %label, error = %e, "Strategy failed, aborting fuzz run");
                return Err(e);
            }
        }
    }

    log_summary(label, &results, start_time);
    Ok(results)
}

fn log_summary(label: &str, results: &[FuzzResult], start_time: Instant) {
    tracing::info!(
        label = %label,
        strategies = %results.len(),
        permutations = %results.iter().map(FuzzResult::len).sum::<usize>(),
        duration_ms = %start_time.elapsed().as_millis(),
        "Fuzz run completed"
    );
}

/// Strategy list bound to a configuration
pub struct Fuzzer {
    config: FuzzConfig,
    strategies: Vec<Option<StrategyRef>>,
}

impl Fuzzer {
    /// Create a fuzzer over an explicit strategy list
    pub fn new(strategies: Vec<Option<StrategyRef>>) -> Self {
        Self {
            config: FuzzConfig::default(),
            strategies,
        }
    }

    /// Resolve the locale and build the strategies named by the configuration
    pub fn from_config(config: FuzzConfig) -> Result<Self> {
        let locale = mapping::require_locale(&config.locale)?;
        let strategies = build_all(&config.strategies, &locale, config.double_hit_limit);

        tracing::debug!(
            locale = %locale.name(),
            strategies = %config.strategies.len(),
            double_hit_limit = ?config.double_hit_limit,
            "Fuzzer configured"
        );

        Ok(Self { config, strategies })
    }

    pub fn config(&self) -> &FuzzConfig {
        &self.config
    }

    pub fn strategies(&self) -> &[Option<StrategyRef>] {
        &self.strategies
    }

    /// Fuzz a plain string
    pub fn fuzz(&self, name: &str) -> Result<Vec<FuzzResult>> {
        self.fuzz_with_suffix(name, "")
    }

    /// Fuzz a label, reattaching `suffix` to every permutation
    pub fn fuzz_with_suffix(&self, label: &str, suffix: &str) -> Result<Vec<FuzzResult>> {
        fuzz(label, suffix, &self.strategies)
    }

    /// Split a domain into label and public suffix, then fuzz the label
    pub fn fuzz_domain(&self, domain: &str, splitter: &dyn DomainSplitter) -> Result<Vec<FuzzResult>> {
        let split = splitter.split(domain)?;
        self.fuzz_with_suffix(&split.label(), &split.suffix)
    }

    /// Fuzz using the configured execution mode
    pub async fn run(&self, label: &str, suffix: &str) -> Result<Vec<FuzzResult>> {
        if self.config.concurrent {
            fuzz_concurrent(label, suffix, &self.strategies).await
        } else {
            fuzz(label, suffix, &self.strategies)
        }
    }
}
