//! Content synchronizer: plans and executes the writes that bring a
//! document snapshot in line with a selected language.
//!
//! `plan` is a pure function from (bundle set, language, snapshot, page URL)
//! to a list of `Mutation` commands; `apply` executes that plan. Splitting
//! the two keeps every localization rule unit-testable without a live
//! document, and makes idempotence easy to verify: planning against an
//! already-synchronized snapshot produces commands that change nothing.

use crate::bundle::{resolve, BundleSet};
use crate::document::{DocumentSnapshot, ElementKind, Mutation};
use crate::i18n::Language;
use crate::urls::{alternate_links, localized_url};
use url::Url;

/// Bundle keys for document metadata. `og`/`twitter` variants are optional
/// overrides; they fall back to the base title/description.
const KEY_TITLE: &str = "meta.title";
const KEY_DESCRIPTION: &str = "meta.description";
const KEY_OG_TITLE: &str = "meta.og_title";
const KEY_OG_DESCRIPTION: &str = "meta.og_description";
const KEY_TWITTER_DESCRIPTION: &str = "meta.twitter_description";

/// Plan the mutations that localize a snapshot for `language`.
///
/// Per-element rules (an unresolvable key leaves the element untouched):
/// - input-like elements receive the value as placeholder, and as value
///   only when the field is currently empty
/// - image elements receive it as alt text, only when an alt attribute
///   already exists
/// - text elements carrying an accessibility label receive it as that
///   label; all others receive it as visible text content
///
/// Document metadata (title, descriptions, language attribute, canonical,
/// hreflang alternates) is always re-planned so the URL-derived parts stay
/// consistent even when the bundle is missing keys.
pub fn plan(
    bundles: &BundleSet,
    language: Language,
    snapshot: &DocumentSnapshot,
    page_url: &Url,
) -> Vec<Mutation> {
    let translations = bundles.language(language.code());
    let mut mutations = Vec::new();

    for element in &snapshot.elements {
        let Some(value) = resolve(translations, &element.key) else {
            continue;
        };

        match element.kind {
            ElementKind::Input => {
                mutations.push(Mutation::SetPlaceholder {
                    element: element.id.clone(),
                    text: value.to_string(),
                });
                if element.value_is_empty() {
                    mutations.push(Mutation::SetValue {
                        element: element.id.clone(),
                        text: value.to_string(),
                    });
                }
            }
            ElementKind::Image => {
                if element.alt.is_some() {
                    mutations.push(Mutation::SetAlt {
                        element: element.id.clone(),
                        text: value.to_string(),
                    });
                }
            }
            ElementKind::Text => {
                if element.aria_label.is_some() {
                    mutations.push(Mutation::SetAriaLabel {
                        element: element.id.clone(),
                        text: value.to_string(),
                    });
                } else {
                    mutations.push(Mutation::SetText {
                        element: element.id.clone(),
                        text: value.to_string(),
                    });
                }
            }
        }
    }

    let title = resolve(translations, KEY_TITLE);
    let description = resolve(translations, KEY_DESCRIPTION);

    if let Some(title) = title {
        mutations.push(Mutation::SetTitle {
            text: title.to_string(),
        });
    }
    if let Some(description) = description {
        mutations.push(Mutation::SetMetaDescription {
            text: description.to_string(),
        });
    }
    if let Some(og_title) = resolve(translations, KEY_OG_TITLE).or(title) {
        mutations.push(Mutation::SetOgTitle {
            text: og_title.to_string(),
        });
    }
    if let Some(og_description) = resolve(translations, KEY_OG_DESCRIPTION).or(description) {
        mutations.push(Mutation::SetOgDescription {
            text: og_description.to_string(),
        });
    }
    if let Some(twitter) = resolve(translations, KEY_TWITTER_DESCRIPTION).or(description) {
        mutations.push(Mutation::SetTwitterDescription {
            text: twitter.to_string(),
        });
    }

    mutations.push(Mutation::SetDocumentLanguage {
        code: language.code().to_string(),
    });
    mutations.push(Mutation::SetCanonical {
        href: localized_url(page_url, language).into(),
    });
    mutations.push(Mutation::SetAlternates {
        links: alternate_links(page_url),
    });

    mutations
}

/// Plan and execute in one step. Returns the executed plan.
pub fn apply(
    bundles: &BundleSet,
    language: Language,
    snapshot: &mut DocumentSnapshot,
    page_url: &Url,
) -> Vec<Mutation> {
    let mutations = plan(bundles, language, snapshot, page_url);
    snapshot.apply_all(&mutations);
    mutations
}
