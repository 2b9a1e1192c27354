//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of the languages the site is
//! published in. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata for a specific language: its code, names, the
/// hreflang code advertised to search engines, enabled status, and whether
/// it is the default (fallback) language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Français")
    pub native_name: &'static str,

    /// Code used in hreflang alternate links (usually equal to `code`)
    pub hreflang: &'static str,

    /// Whether this is the default language (only one should be true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// The registry contains all supported languages and provides methods to
/// query them. It is initialized once on first access and remains immutable
/// thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// The default language is the one the site falls back to when no valid
    /// selection exists. There should be exactly one.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple defaults are
    /// defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Default language configurations.
///
/// This function returns the set of languages the site is published in.
/// Currently English (default) and French.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            hreflang: "en",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            hreflang: "fr",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("en");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert_eq!(config.native_name, "English");
        assert_eq!(config.hreflang, "en");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_french() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("fr");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "fr");
        assert_eq!(config.name, "French");
        assert_eq!(config.native_name, "Français");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("es");
        assert!(config.is_none());
    }

    #[test]
    fn test_list_enabled_contains_english_and_french() {
        let registry = LanguageRegistry::get();
        let enabled = registry.list_enabled();

        assert_eq!(enabled.len(), 2);
        assert!(enabled.iter().any(|lang| lang.code == "en"));
        assert!(enabled.iter().any(|lang| lang.code == "fr"));
    }

    #[test]
    fn test_list_all_contains_english_and_french() {
        let registry = LanguageRegistry::get();
        let all = registry.list_all();

        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|lang| lang.code == "en"));
        assert!(all.iter().any(|lang| lang.code == "fr"));
    }

    #[test]
    fn test_default_language_is_english() {
        let registry = LanguageRegistry::get();
        let default = registry.default_language();

        assert_eq!(default.code, "en");
        assert!(default.is_default);
    }

    #[test]
    fn test_is_enabled_english() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_enabled("en"));
    }

    #[test]
    fn test_is_enabled_french() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_enabled("fr"));
    }

    #[test]
    fn test_is_enabled_nonexistent() {
        let registry = LanguageRegistry::get();
        assert!(!registry.is_enabled("es"));
    }
}
