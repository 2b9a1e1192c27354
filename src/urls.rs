//! URL contract for language selection.
//!
//! The site uses a single scheme everywhere: a `lang` query parameter
//! (`?lang=fr`). The default language's URL carries no parameter at all, so
//! exactly one URL exists per (page, language) pair, and the `x-default`
//! alternate points at the bare URL. Path-segment localization (`/fr/`) is
//! deliberately not supported; mixing schemes breaks canonical/hreflang
//! consistency.

use crate::document::AlternateLink;
use crate::i18n::{Language, LanguageRegistry};
use url::Url;

/// Query parameter carrying the language selection.
pub const LANG_PARAM: &str = "lang";

/// Read the raw language signal from a page URL, if any.
///
/// The value is returned as-is; coercion to a supported language is the
/// caller's job (`Language::from_code_or_default`).
pub fn language_from_url(page_url: &Url) -> Option<String> {
    page_url
        .query_pairs()
        .find(|(key, _)| key == LANG_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Rewrite a page URL for the given language.
///
/// Any existing `lang` parameter is dropped first; other query parameters
/// are preserved. The default language yields a bare URL with no `lang`
/// parameter.
pub fn localized_url(page_url: &Url, language: Language) -> Url {
    let mut url = page_url.clone();

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != LANG_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        if !language.is_default() {
            pairs.append_pair(LANG_PARAM, language.code());
        }
    }

    // query_pairs_mut leaves an empty query string when nothing was appended
    if url.query().map_or(false, str::is_empty) {
        url.set_query(None);
    }

    url
}

/// Build the alternate (hreflang) link set for a page: one entry per
/// enabled language plus `x-default` pointing at the bare URL.
pub fn alternate_links(page_url: &Url) -> Vec<AlternateLink> {
    let registry = LanguageRegistry::get();
    let mut links: Vec<AlternateLink> = registry
        .list_enabled()
        .iter()
        .map(|config| AlternateLink {
            hreflang: config.hreflang.to_string(),
            href: localized_url(page_url, Language::from_code_or_default(config.code)).into(),
        })
        .collect();

    links.push(AlternateLink {
        hreflang: "x-default".to_string(),
        href: localized_url(page_url, Language::default_language()).into(),
    });

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str) -> Url {
        Url::parse(url).expect("test URL should parse")
    }

    // ==================== language_from_url Tests ====================

    #[test]
    fn test_reads_lang_param() {
        let url = page("https://example.com/?lang=fr");
        assert_eq!(language_from_url(&url), Some("fr".to_string()));
    }

    #[test]
    fn test_no_lang_param() {
        let url = page("https://example.com/");
        assert_eq!(language_from_url(&url), None);
    }

    #[test]
    fn test_reads_lang_param_among_others() {
        let url = page("https://example.com/?utm_source=x&lang=fr");
        assert_eq!(language_from_url(&url), Some("fr".to_string()));
    }

    #[test]
    fn test_reads_raw_invalid_value() {
        // Coercion happens later; the URL layer just reports the signal
        let url = page("https://example.com/?lang=zz");
        assert_eq!(language_from_url(&url), Some("zz".to_string()));
    }

    // ==================== localized_url Tests ====================

    #[test]
    fn test_localized_url_adds_param() {
        let url = localized_url(&page("https://example.com/"), Language::FRENCH);
        assert_eq!(url.as_str(), "https://example.com/?lang=fr");
    }

    #[test]
    fn test_localized_url_default_is_bare() {
        let url = localized_url(&page("https://example.com/?lang=fr"), Language::ENGLISH);
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_localized_url_replaces_existing_param() {
        let url = localized_url(&page("https://example.com/?lang=en"), Language::FRENCH);
        assert_eq!(url.as_str(), "https://example.com/?lang=fr");
    }

    #[test]
    fn test_localized_url_preserves_other_params() {
        let url = localized_url(
            &page("https://example.com/?utm_source=x&lang=en"),
            Language::FRENCH,
        );
        assert_eq!(url.as_str(), "https://example.com/?utm_source=x&lang=fr");
    }

    #[test]
    fn test_localized_url_roundtrip() {
        let url = localized_url(&page("https://example.com/pricing"), Language::FRENCH);
        assert_eq!(language_from_url(&url), Some("fr".to_string()));
    }

    #[test]
    fn test_localized_url_is_idempotent() {
        let once = localized_url(&page("https://example.com/"), Language::FRENCH);
        let twice = localized_url(&once, Language::FRENCH);
        assert_eq!(once, twice);
    }

    // ==================== alternate_links Tests ====================

    #[test]
    fn test_alternates_cover_languages_and_x_default() {
        let links = alternate_links(&page("https://example.com/"));

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].hreflang, "en");
        assert_eq!(links[0].href, "https://example.com/");
        assert_eq!(links[1].hreflang, "fr");
        assert_eq!(links[1].href, "https://example.com/?lang=fr");
        assert_eq!(links[2].hreflang, "x-default");
        assert_eq!(links[2].href, "https://example.com/");
    }

    #[test]
    fn test_alternates_strip_incoming_lang_param() {
        let links = alternate_links(&page("https://example.com/?lang=fr"));

        let en = links.iter().find(|l| l.hreflang == "en").unwrap();
        assert_eq!(en.href, "https://example.com/");
    }
}
