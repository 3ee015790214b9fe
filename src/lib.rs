//! Typogenerator - typosquatting candidate generation
//!
//! Turns a domain label into the strings a user might type or register by
//! mistake: omitted, repeated or swapped characters, vowel swaps, and
//! locale-specific homoglyph and keyboard substitutions.

pub mod domain;
pub mod error;
pub mod fuzz;
pub mod mapping;
pub mod output;
pub mod strategy;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TypoError};
pub use types::{FuzzConfig, FuzzReport, FuzzResult, OutputFormat};

// Re-export main functionality
pub use domain::{DomainSplitter, PublicSuffixSplitter, SplitDomain};
pub use fuzz::{fuzz, fuzz_concurrent, Fuzzer};
pub use mapping::{Locale, Mapping};
pub use strategy::{Strategy, StrategyKind, StrategyRef};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
