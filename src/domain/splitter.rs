//! Public suffix list based domain splitter

use super::{DomainSplitter, DomainValidator, SplitDomain};
use crate::error::{Result, TypoError};

/// Splits domains using the compiled-in public suffix list
#[derive(Debug, Clone, Default)]
pub struct PublicSuffixSplitter {
    validator: DomainValidator,
}

impl PublicSuffixSplitter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainSplitter for PublicSuffixSplitter {
    fn split(&self, domain: &str) -> Result<SplitDomain> {
        let normalized = self.validator.validate(domain).map_err(|e| match e {
            TypoError::Validation { message } => TypoError::domain_parse(domain, message),
            other => other,
        })?;

        let suffix = psl::suffix_str(&normalized)
            .ok_or_else(|| TypoError::domain_parse(domain, "no public suffix found"))?;
        let registrable = psl::domain_str(&normalized).ok_or_else(|| {
            TypoError::domain_parse(domain, format!("'{}' is a public suffix", normalized))
        })?;

        let name = registrable
            .strip_suffix(suffix)
            .and_then(|s| s.strip_suffix('.'))
            .filter(|s| !s.is_empty())
            .ok_or_else(|| TypoError::domain_parse(domain, "missing registrable label"))?;

        let subdomain = normalized
            .strip_suffix(registrable)
            .and_then(|s| s.strip_suffix('.'))
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        tracing::debug!(
            domain = %normalized,
            subdomain = ?subdomain,
            name = %name,
            suffix = %suffix,
            "Split domain"
        );

        Ok(SplitDomain {
            subdomain,
            name: name.to_string(),
            suffix: suffix.to_string(),
        })
    }
}
