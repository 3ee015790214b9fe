//! Domain splitting and encoding
//!
//! Only the label of a domain is fuzzed. The splitter separates it from the
//! public suffix so strategies can reattach the suffix verbatim.

pub mod idna;
pub mod splitter;
pub mod validator;

pub use splitter::PublicSuffixSplitter;
pub use validator::DomainValidator;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Trait for decomposing a domain into fuzzable label and suffix
pub trait DomainSplitter: Send + Sync {
    /// Split a full domain such as `www.example.co.uk`
    fn split(&self, domain: &str) -> Result<SplitDomain>;
}

/// A domain decomposed into subdomain, registrable name and public suffix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitDomain {
    /// Everything left of the registrable name, e.g. `www`
    pub subdomain: Option<String>,
    /// Registrable name without suffix, e.g. `example`
    pub name: String,
    /// Public suffix, e.g. `co.uk`
    pub suffix: String,
}

impl SplitDomain {
    /// The part handed to strategies: `subdomain.name`, or `name` alone
    pub fn label(&self) -> String {
        match &self.subdomain {
            Some(sub) => format!("{}.{}", sub, self.name),
            None => self.name.clone(),
        }
    }
}
