//! ASCII (punycode) form of generated permutations

/// Encode a permutation with IDNA; `None` when it cannot be encoded
pub fn to_ascii(domain: &str) -> Option<String> {
    match ::idna::domain_to_ascii(domain) {
        Ok(ascii) if !ascii.is_empty() => Some(ascii),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(domain = %domain, error = ?e, "IDNA encoding failed");
            None
        }
    }
}

/// Encoded form or an empty string, as shown in tabular output
pub fn to_ascii_or_blank(domain: &str) -> String {
    to_ascii(domain).unwrap_or_default()
}
