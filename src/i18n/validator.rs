//! Bundle completeness validation module.
//!
//! This module checks a loaded bundle set for content drift between
//! languages: keys present in the default language but missing from a
//! translation (the element would silently keep stale text), and keys
//! present only in a translation (dead content nobody renders in the
//! default language).
//!
//! Validation is observational. A report full of warnings never fails a
//! load; it is logged so the content owner can fix the bundle.

use crate::bundle::BundleSet;
use crate::i18n::LanguageRegistry;
use serde_json::Value;
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about a bundle set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical problems (e.g., the default language has no content)
    pub errors: Vec<String>,

    /// Non-critical warnings about potential content drift
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for bundle completeness.
pub struct BundleValidator;

impl BundleValidator {
    /// Validate a bundle set against the language registry.
    ///
    /// Checks that:
    /// - the default language has content at all (error otherwise)
    /// - every enabled language is present in the payload
    /// - every enabled language covers the default language's key set
    /// - no language carries keys unknown to the default language
    ///
    /// # Returns
    /// A `ValidationReport` containing any errors or warnings found.
    pub fn validate(bundles: &BundleSet) -> ValidationReport {
        let mut report = ValidationReport::new();
        let registry = LanguageRegistry::get();
        let default_code = registry.default_language().code;

        let default_keys = Self::leaf_keys(bundles.language(default_code));
        if default_keys.is_empty() {
            report.errors.push(format!(
                "Default language '{}' has no translation keys",
                default_code
            ));
            return report;
        }

        for config in registry.list_enabled() {
            if config.code == default_code {
                continue;
            }

            let translation = bundles.language(config.code);
            if translation.as_object().map_or(true, |map| map.is_empty()) {
                report.warnings.push(format!(
                    "Language '{}' is missing from the bundle payload",
                    config.code
                ));
                continue;
            }

            let translated_keys = Self::leaf_keys(translation);

            let missing: Vec<_> = default_keys.difference(&translated_keys).collect();
            if !missing.is_empty() {
                report.warnings.push(format!(
                    "Language '{}' is missing {} key(s): {:?}",
                    config.code,
                    missing.len(),
                    missing
                ));
            }

            let extra: Vec<_> = translated_keys.difference(&default_keys).collect();
            if !extra.is_empty() {
                report.warnings.push(format!(
                    "Language '{}' has {} key(s) absent from '{}': {:?}",
                    config.code,
                    extra.len(),
                    default_code,
                    extra
                ));
            }
        }

        report
    }

    /// Collect every dotted leaf key reachable in a language mapping.
    fn leaf_keys(value: &Value) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        Self::collect_leaf_keys(value, String::new(), &mut keys);
        keys
    }

    fn collect_leaf_keys(value: &Value, prefix: String, out: &mut BTreeSet<String>) {
        match value {
            Value::Object(map) => {
                for (segment, child) in map {
                    let path = if prefix.is_empty() {
                        segment.clone()
                    } else {
                        format!("{}.{}", prefix, segment)
                    };
                    Self::collect_leaf_keys(child, path, out);
                }
            }
            _ => {
                if !prefix.is_empty() {
                    out.insert(prefix);
                }
            }
        }
    }
}
