//! Localization synchronizer for a small multilingual marketing site.
//!
//! Given a language code, this crate produces the fully localized,
//! consistent document state: element text and attributes, document title,
//! meta and social-preview tags, the language attribute, canonical link,
//! and hreflang alternates.
//!
//! The page is modeled as an explicit [`document::DocumentSnapshot`];
//! synchronization plans a list of [`document::Mutation`] commands (a pure
//! function) and then executes them, so every localization rule is
//! testable without a live document. The
//! [`controller::LocalizationController`] owns the moving parts: the
//! memoized [`bundle::BundleLoader`], the persisted preference, and the
//! current language.

pub mod bundle;
pub mod config;
pub mod controller;
pub mod document;
pub mod fallback;
pub mod i18n;
pub mod prefs;
pub mod retry;
pub mod sync;
pub mod urls;
