//! Baked-in fallback content for the default language.
//!
//! When the bundle source is unreachable the page must still render real
//! content, so the default language's strings ship with the binary. The
//! fallback converts into a one-language `BundleSet`, which means the
//! failure path runs through exactly the same synchronization code as the
//! success path.

use crate::bundle::BundleSet;
use serde_json::json;

/// Hard-coded default-language content.
#[derive(Debug, Clone)]
pub struct FallbackContent {
    /// Language code the fallback is written in
    pub language: &'static str,

    /// Document title
    pub title: &'static str,

    /// Description meta tag
    pub description: &'static str,

    /// Hero headline
    pub hero_title: &'static str,

    /// Hero subheadline
    pub hero_subtitle: &'static str,

    /// Navigation menu toggle label
    pub nav_menu: &'static str,

    /// Contact form name placeholder
    pub contact_name: &'static str,

    /// Contact form email placeholder
    pub contact_email: &'static str,

    /// Contact form message placeholder
    pub contact_message: &'static str,

    /// Contact form submit button label
    pub contact_submit: &'static str,
}

/// English fallback content (default language)
pub const ENGLISH_FALLBACK: FallbackContent = FallbackContent {
    language: "en",
    title: "Home",
    description: "Welcome to our site",
    hero_title: "Build faster",
    hero_subtitle: "Everything you need to launch in days, not months",
    nav_menu: "Open menu",
    contact_name: "Your name",
    contact_email: "Your email",
    contact_message: "Your message",
    contact_submit: "Send",
};

impl FallbackContent {
    /// Convert the fallback into a one-language bundle set so it flows
    /// through the normal synchronization path.
    pub fn to_bundle_set(&self) -> BundleSet {
        let payload = json!({
            (self.language): {
                "meta": {
                    "title": self.title,
                    "description": self.description,
                },
                "hero": {
                    "title": self.hero_title,
                    "subtitle": self.hero_subtitle,
                },
                "nav": {
                    "menu": self.nav_menu,
                },
                "contact": {
                    "form": {
                        "name": self.contact_name,
                        "email": self.contact_email,
                        "message": self.contact_message,
                        "submit": self.contact_submit,
                    }
                }
            }
        });

        BundleSet::from_value(payload).expect("fallback payload is a JSON object")
    }
}
