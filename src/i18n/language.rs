//! Language type: Flexible, validated language representation.
//!
//! This module provides the `Language` type, a copyable handle that is
//! guaranteed to refer to a supported, enabled language in the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
///
/// This type represents a language that has been validated against the
/// registry. It ensures that only supported, enabled languages can be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "fr")
    code: &'static str,
}

impl Language {
    /// The default site language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// The French translation.
    pub const FRENCH: Language = Language { code: "fr" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Create a Language from a code, coercing anything invalid to the
    /// default language.
    ///
    /// Malformed or unsupported codes (bad URL parameters, stale stored
    /// preferences, exotic browser locales) must never fail resolution, so
    /// this is the constructor used on all untrusted input paths. Inputs
    /// like "fr-FR" or "FR" match on their primary subtag.
    pub fn from_code_or_default(code: &str) -> Language {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        Language::from_code(&primary).unwrap_or_else(|_| Language::default_language())
    }

    /// Get the default (fallback) language.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the default site language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}
