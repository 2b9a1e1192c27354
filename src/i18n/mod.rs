//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides a centralized, extensible architecture for managing
//! the languages the site is published in. All language-related metadata and
//! validation infrastructure is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type that replaces hardcoded string codes
//! - `validator`: Bundle completeness validation
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Language, LanguageRegistry};
//!
//! // Get the default language (English)
//! let default = Language::default_language();
//!
//! // Coerce untrusted input to a supported language
//! let french = Language::from_code_or_default("fr-CA");
//!
//! // List all enabled languages
//! let languages = LanguageRegistry::get().list_enabled();
//! ```

mod language;
mod registry;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{BundleValidator, ValidationReport};
