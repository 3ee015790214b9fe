//! Typogenerator - typosquatting candidate generation
//!
//! Prints the typo variants of a string or domain, one per line, as quoted CSV
//! or as a JSON report.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use std::process;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use typogenerator::{
    domain::{DomainSplitter, PublicSuffixSplitter},
    mapping, output, FuzzConfig, FuzzReport, Fuzzer, OutputFormat, StrategyKind, TypoError,
};

#[derive(Parser, Debug)]
#[command(name = "typogenerator", version, about = "Generate typosquatting candidates for a string or domain")]
struct Cli {
    /// String to alternate
    #[arg(short = 's', long = "input", default_value = "mymensingh")]
    input: String,

    /// Treat the input as a full domain and fuzz only its label
    #[arg(short, long)]
    domain: bool,

    /// Output format: plain (one permutation per line), csv or json
    #[arg(short, long, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Locale of the similarity and keyboard tables [env: TYPOGEN_LOCALE]
    #[arg(short, long)]
    locale: Option<String>,

    /// Strategy to run; repeat to run several [env: TYPOGEN_STRATEGIES]
    #[arg(long = "strategy", value_name = "NAME")]
    strategies: Vec<StrategyKind>,

    /// Maximum DoubleHit permutations, 0 for unlimited [env: TYPOGEN_DOUBLE_HIT_LIMIT]
    #[arg(long, value_name = "N")]
    double_hit_limit: Option<usize>,

    /// Run strategies concurrently [env: TYPOGEN_CONCURRENT]
    #[arg(long, overrides_with = "no_concurrent")]
    concurrent: bool,

    /// Run strategies one after another, overriding TYPOGEN_CONCURRENT
    #[arg(long, overrides_with = "concurrent")]
    no_concurrent: bool,

    /// List registered locales and exit
    #[arg(long)]
    list_locales: bool,
}

#[tokio::main]
async fn main() {
    init_tracing();

    // Initialize the library
    if let Err(e) = typogenerator::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<TypoError>() {
            Some(typo_error) => eprintln!("{}", typo_error.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

/// Logs go to stderr so stdout only carries results
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merge command line flags over the environment configuration
fn build_config(cli: &Cli) -> typogenerator::Result<FuzzConfig> {
    let mut config = FuzzConfig::from_env()?;

    if let Some(locale) = &cli.locale {
        config.locale = locale.trim().to_lowercase();
    }
    if !cli.strategies.is_empty() {
        config.strategies = cli.strategies.clone();
    }
    if let Some(limit) = cli.double_hit_limit {
        config.double_hit_limit = (limit > 0).then_some(limit);
    }
    if cli.concurrent {
        config.concurrent = true;
    } else if cli.no_concurrent {
        config.concurrent = false;
    }

    Ok(config)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.list_locales {
        for name in mapping::available_locales() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = build_config(&cli)?;
    let fuzzer = Fuzzer::from_config(config)?;

    let (label, suffix) = if cli.domain {
        let split = PublicSuffixSplitter::new().split(&cli.input)?;
        (split.label(), Some(split.suffix))
    } else {
        (cli.input.clone(), None)
    };

    let start = Instant::now();
    let results = fuzzer
        .run(&label, suffix.as_deref().unwrap_or_default())
        .await?;

    let report = FuzzReport {
        input: cli.input,
        suffix,
        generated_at: Utc::now(),
        duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        results,
    };

    let stdout = std::io::stdout();
    output::write_report(&report, cli.format, stdout.lock())
        .context("Failed to write results")?;

    Ok(())
}
