//! Domain name validation utilities

use crate::error::{Result, TypoError};
use regex::Regex;
use std::sync::LazyLock;

static DOMAIN_CHARS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{M}\p{N}._-]+$").ok());

/// Structural checks applied before a domain is split
#[derive(Debug, Clone, Default)]
pub struct DomainValidator;

impl DomainValidator {
    /// Create a new domain validator
    pub fn new() -> Self {
        Self
    }

    /// Validate a domain name, returning its normalized form
    pub fn validate(&self, domain: &str) -> Result<String> {
        let domain = self.normalize(domain);

        self.validate_format(&domain)?;
        self.validate_length(&domain)?;
        self.validate_characters(&domain)?;
        self.validate_labels(&domain)?;

        Ok(domain)
    }

    /// Normalize domain name: trimmed, lowercase, no trailing root dot
    pub fn normalize(&self, domain: &str) -> String {
        let domain = domain.trim().to_lowercase();
        match domain.strip_suffix('.') {
            Some(stripped) if !stripped.is_empty() => stripped.to_string(),
            _ => domain,
        }
    }

    fn validate_format(&self, domain: &str) -> Result<()> {
        if domain.is_empty() {
            return Err(crate::validation_error!("Domain name cannot be empty"));
        }

        if domain.starts_with('-') || domain.ends_with('-') {
            return Err(crate::validation_error!("Domain cannot start or end with hyphen"));
        }

        if domain.starts_with('.') || domain.ends_with('.') {
            return Err(crate::validation_error!("Domain cannot start or end with dot"));
        }

        if domain.contains("..") {
            return Err(crate::validation_error!("Domain cannot contain consecutive dots"));
        }

        Ok(())
    }

    fn validate_length(&self, domain: &str) -> Result<()> {
        if domain.len() > 253 {
            return Err(crate::validation_error!("Domain name too long (max 253 characters)"));
        }
        Ok(())
    }

    fn validate_characters(&self, domain: &str) -> Result<()> {
        let valid_chars = DOMAIN_CHARS
            .as_ref()
            .ok_or_else(|| crate::internal_error!("Domain character pattern failed to compile"))?;

        if !valid_chars.is_match(domain) {
            return Err(crate::validation_error!("Domain contains invalid characters"));
        }
        Ok(())
    }

    fn validate_labels(&self, domain: &str) -> Result<()> {
        for label in domain.split('.') {
            if label.chars().count() > 63 {
                return Err(TypoError::validation(format!(
                    "Domain label '{}' too long (max 63 characters)",
                    label
                )));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(TypoError::validation(format!(
                    "Domain label '{}' cannot start or end with hyphen",
                    label
                )));
            }
        }
        Ok(())
    }
}
