//! Per-locale character similarity tables
//!
//! A [`Mapping`] maps a character, or a short character sequence such as `rn`,
//! to the strings it can be mistaken for. A [`Locale`] bundles two of them:
//! one for visual similarity (homoglyphs) and one for keyboard adjacency.

mod english;
mod french;

use crate::error::{Result, TypoError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Name of the built-in English locale
pub const ENGLISH: &str = "english";

/// Name of the built-in French locale
pub const FRENCH: &str = "french";

/// Lookup table from a source sequence to its replacement set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    name: String,
    entries: HashMap<String, Vec<String>>,
    max_key_chars: usize,
}

impl Mapping {
    /// Build a mapping table, rejecting entries that break the table invariants
    pub fn new<K, V, I>(name: impl Into<String>, entries: I) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, Vec<V>)>,
    {
        let name = name.into();
        let mut table = HashMap::new();

        for (key, values) in entries {
            let key: String = key.into();
            let values: Vec<String> = values.into_iter().map(Into::into).collect();

            check_entry(&name, &key, &values, &table)?;
            table.insert(key, values);
        }

        Ok(Self::from_table(name, table))
    }

    /// Build a mapping table from compiled-in data.
    ///
    /// Entries rejected by [`Mapping::new`] are dropped with a warning; for a
    /// duplicate key the first entry wins.
    pub(crate) fn from_static(name: &str, entries: &[(&str, &[&str])]) -> Self {
        let mut table: HashMap<String, Vec<String>> = HashMap::with_capacity(entries.len());

        for (key, values) in entries {
            let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();

            if let Err(e) = check_entry(name, key, &values, &table) {
                tracing::warn!(locale = %name, key = %key, error = %e, "Skipping unusable mapping entry");
                continue;
            }
            table.insert(key.to_string(), values);
        }

        Self::from_table(name.to_string(), table)
    }

    fn from_table(name: String, entries: HashMap<String, Vec<String>>) -> Self {
        let max_key_chars = entries
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);

        Self {
            name,
            entries,
            max_key_chars,
        }
    }

    /// Table name, e.g. `english-similar`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replacement set for an exact key, `None` when no substitution is available
    pub fn lookup(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Longest key matching `chars` at `start`.
    ///
    /// Returns the matched length in characters together with its replacements.
    pub fn longest_match(&self, chars: &[char], start: usize) -> Option<(usize, &[String])> {
        let available = chars.len().saturating_sub(start);
        let longest = self.max_key_chars.min(available);

        (1..=longest).rev().find_map(|len| {
            let key: String = chars[start..start + len].iter().collect();
            self.lookup(&key).map(|values| (len, values))
        })
    }

    /// Number of keys in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Table invariants: non-empty key, at least one replacement, no key mapping
/// to itself and no duplicate keys
fn check_entry(
    name: &str,
    key: &str,
    values: &[String],
    table: &HashMap<String, Vec<String>>,
) -> Result<()> {
    if key.is_empty() {
        return Err(TypoError::mapping(name, "empty key"));
    }
    if values.is_empty() {
        return Err(TypoError::mapping(
            name,
            format!("key '{}' has no replacements", key),
        ));
    }
    if values.iter().any(|v| v == key) {
        return Err(TypoError::mapping(
            name,
            format!("key '{}' maps to itself", key),
        ));
    }
    if table.contains_key(key) {
        return Err(TypoError::mapping(name, format!("duplicate key '{}'", key)));
    }
    Ok(())
}

/// A named pair of mapping tables
#[derive(Debug, Clone)]
pub struct Locale {
    name: String,
    similar: Arc<Mapping>,
    keyboard: Arc<Mapping>,
}

impl Locale {
    /// Create a locale from its homoglyph and keyboard tables
    pub fn new(name: impl Into<String>, similar: Mapping, keyboard: Mapping) -> Self {
        Self {
            name: name.into().to_lowercase(),
            similar: Arc::new(similar),
            keyboard: Arc::new(keyboard),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Visually similar characters (homoglyphs)
    pub fn similar(&self) -> Arc<Mapping> {
        Arc::clone(&self.similar)
    }

    /// Physically adjacent keys on the locale's keyboard layout
    pub fn keyboard(&self) -> Arc<Mapping> {
        Arc::clone(&self.keyboard)
    }
}

static REGISTRY: LazyLock<RwLock<HashMap<String, Arc<Locale>>>> = LazyLock::new(|| {
    let mut locales = HashMap::new();
    for locale in [english::locale(), french::locale()] {
        locales.insert(locale.name().to_string(), Arc::new(locale));
    }
    RwLock::new(locales)
});

/// Resolve a registered locale by name (case-insensitive)
pub fn locale(name: &str) -> Option<Arc<Locale>> {
    REGISTRY.read().get(&name.trim().to_lowercase()).cloned()
}

/// Resolve a locale or fail with a configuration error
pub fn require_locale(name: &str) -> Result<Arc<Locale>> {
    locale(name).ok_or_else(|| {
        TypoError::config(format!(
            "Unknown locale: {}. Available locales: {}",
            name,
            available_locales().join(", ")
        ))
    })
}

/// Register a locale, replacing any existing one with the same name
pub fn register_locale(locale: Locale) -> Arc<Locale> {
    let locale = Arc::new(locale);
    let previous = REGISTRY
        .write()
        .insert(locale.name().to_string(), Arc::clone(&locale));

    if previous.is_some() {
        tracing::debug!(locale = %locale.name(), "Replaced registered locale");
    }
    locale
}

/// Names of all registered locales, sorted
pub fn available_locales() -> Vec<String> {
    let mut names: Vec<String> = REGISTRY.read().keys().cloned().collect();
    names.sort();
    names
}

/// The built-in English locale
pub fn english() -> Arc<Locale> {
    locale(ENGLISH).unwrap_or_else(|| Arc::new(english::locale()))
}

/// The built-in French locale
pub fn french() -> Arc<Locale> {
    locale(FRENCH).unwrap_or_else(|| Arc::new(french::locale()))
}
