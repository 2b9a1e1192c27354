//! Document snapshot: an explicit, serializable model of the localizable
//! page surface.
//!
//! The original site rewrote the live DOM in place, which made the
//! synchronization step untestable without a browser. Here the page is data:
//! a list of bound elements plus document-level metadata. Synchronization
//! plans `Mutation` commands against a snapshot (pure) and then executes
//! them, so the same snapshot type serves production and tests.

use serde::{Deserialize, Serialize};

/// What kind of element a localization key is bound to. The kind decides
/// which attribute the resolved value lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Plain element; the value becomes visible text content
    Text,
    /// Form input or textarea; the value becomes the placeholder
    Input,
    /// Image; the value becomes the alt text
    Image,
}

/// One element that opted in to localization via the marker attribute.
///
/// `key` is the dotted bundle key; several elements may share a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Stable identifier within the snapshot
    pub id: String,

    /// Dotted localization key (e.g., "contact.form.name")
    pub key: String,

    /// Element kind, deciding where the resolved value is written
    pub kind: ElementKind,

    /// Visible text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Placeholder text (input-like elements)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Current field value (input-like elements)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Alt text; `Some` means the image carries an alt attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Accessibility label; `Some` means the element carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

impl Element {
    /// Whether the field currently holds no user-visible value.
    pub fn value_is_empty(&self) -> bool {
        self.value.as_deref().map_or(true, |v| v.is_empty())
    }
}

/// A per-language alternate link (hreflang annotation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateLink {
    /// hreflang code ("en", "fr", or "x-default")
    pub hreflang: String,
    /// Absolute URL of the alternate
    pub href: String,
}

/// Document-level metadata kept consistent with the selected language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Document title
    pub title: String,

    /// Description meta tag
    pub description: String,

    /// Open Graph title
    pub og_title: String,

    /// Open Graph description
    pub og_description: String,

    /// Twitter card description
    pub twitter_description: String,

    /// Document language attribute (html lang)
    pub language: String,

    /// Canonical link
    pub canonical: String,

    /// Alternate links, one per enabled language plus x-default
    #[serde(default)]
    pub alternates: Vec<AlternateLink>,
}

/// The full localizable page surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Elements bound to localization keys
    pub elements: Vec<Element>,

    /// Document-level metadata
    pub meta: DocumentMeta,
}

/// One write against the document. The synchronizer emits a list of these;
/// executing a list twice leaves the snapshot in the same observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Replace an element's visible text content
    SetText { element: String, text: String },

    /// Replace an input's placeholder
    SetPlaceholder { element: String, text: String },

    /// Fill an input's value (planned only for empty fields)
    SetValue { element: String, text: String },

    /// Replace an image's alt text
    SetAlt { element: String, text: String },

    /// Replace an element's accessibility label
    SetAriaLabel { element: String, text: String },

    /// Replace the document title
    SetTitle { text: String },

    /// Replace the description meta tag
    SetMetaDescription { text: String },

    /// Replace the Open Graph title
    SetOgTitle { text: String },

    /// Replace the Open Graph description
    SetOgDescription { text: String },

    /// Replace the Twitter card description
    SetTwitterDescription { text: String },

    /// Replace the document language attribute
    SetDocumentLanguage { code: String },

    /// Replace the canonical link
    SetCanonical { href: String },

    /// Replace the whole alternate link set
    SetAlternates { links: Vec<AlternateLink> },
}

impl DocumentSnapshot {
    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Execute one mutation command.
    ///
    /// Commands addressing an unknown element are ignored; the plan was
    /// built from a snapshot, and a missing element means the caller passed
    /// a different one.
    pub fn apply(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::SetText { element, text } => {
                if let Some(el) = self.element_mut(element) {
                    el.text = Some(text.clone());
                }
            }
            Mutation::SetPlaceholder { element, text } => {
                if let Some(el) = self.element_mut(element) {
                    el.placeholder = Some(text.clone());
                }
            }
            Mutation::SetValue { element, text } => {
                if let Some(el) = self.element_mut(element) {
                    el.value = Some(text.clone());
                }
            }
            Mutation::SetAlt { element, text } => {
                if let Some(el) = self.element_mut(element) {
                    el.alt = Some(text.clone());
                }
            }
            Mutation::SetAriaLabel { element, text } => {
                if let Some(el) = self.element_mut(element) {
                    el.aria_label = Some(text.clone());
                }
            }
            Mutation::SetTitle { text } => self.meta.title = text.clone(),
            Mutation::SetMetaDescription { text } => self.meta.description = text.clone(),
            Mutation::SetOgTitle { text } => self.meta.og_title = text.clone(),
            Mutation::SetOgDescription { text } => self.meta.og_description = text.clone(),
            Mutation::SetTwitterDescription { text } => {
                self.meta.twitter_description = text.clone()
            }
            Mutation::SetDocumentLanguage { code } => self.meta.language = code.clone(),
            Mutation::SetCanonical { href } => self.meta.canonical = href.clone(),
            Mutation::SetAlternates { links } => self.meta.alternates = links.clone(),
        }
    }

    /// Execute a list of mutation commands in order.
    pub fn apply_all(&mut self, mutations: &[Mutation]) {
        for mutation in mutations {
            self.apply(mutation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_element(id: &str, key: &str, text: &str) -> Element {
        Element {
            id: id.to_string(),
            key: key.to_string(),
            kind: ElementKind::Text,
            text: Some(text.to_string()),
            placeholder: None,
            value: None,
            alt: None,
            aria_label: None,
        }
    }

    // ==================== Element Tests ====================

    #[test]
    fn test_value_is_empty_for_none() {
        let el = text_element("e1", "k", "t");
        assert!(el.value_is_empty());
    }

    #[test]
    fn test_value_is_empty_for_empty_string() {
        let mut el = text_element("e1", "k", "t");
        el.value = Some(String::new());
        assert!(el.value_is_empty());
    }

    #[test]
    fn test_value_is_not_empty_when_filled() {
        let mut el = text_element("e1", "k", "t");
        el.value = Some("typed".to_string());
        assert!(!el.value_is_empty());
    }

    // ==================== Mutation Execution Tests ====================

    #[test]
    fn test_set_text() {
        let mut doc = DocumentSnapshot {
            elements: vec![text_element("hero", "hero.title", "old")],
            meta: DocumentMeta::default(),
        };

        doc.apply(&Mutation::SetText {
            element: "hero".to_string(),
            text: "new".to_string(),
        });

        assert_eq!(doc.element("hero").unwrap().text.as_deref(), Some("new"));
    }

    #[test]
    fn test_unknown_element_is_ignored() {
        let mut doc = DocumentSnapshot::default();
        let before = doc.clone();

        doc.apply(&Mutation::SetText {
            element: "ghost".to_string(),
            text: "boo".to_string(),
        });

        assert_eq!(doc, before);
    }

    #[test]
    fn test_metadata_mutations() {
        let mut doc = DocumentSnapshot::default();

        doc.apply_all(&[
            Mutation::SetTitle {
                text: "Accueil".to_string(),
            },
            Mutation::SetDocumentLanguage {
                code: "fr".to_string(),
            },
            Mutation::SetCanonical {
                href: "https://example.com/?lang=fr".to_string(),
            },
            Mutation::SetAlternates {
                links: vec![AlternateLink {
                    hreflang: "x-default".to_string(),
                    href: "https://example.com/".to_string(),
                }],
            },
        ]);

        assert_eq!(doc.meta.title, "Accueil");
        assert_eq!(doc.meta.language, "fr");
        assert_eq!(doc.meta.canonical, "https://example.com/?lang=fr");
        assert_eq!(doc.meta.alternates.len(), 1);
    }

    #[test]
    fn test_apply_all_is_idempotent() {
        let mut doc = DocumentSnapshot {
            elements: vec![text_element("hero", "hero.title", "old")],
            meta: DocumentMeta::default(),
        };

        let plan = vec![
            Mutation::SetText {
                element: "hero".to_string(),
                text: "new".to_string(),
            },
            Mutation::SetTitle {
                text: "Home".to_string(),
            },
        ];

        doc.apply_all(&plan);
        let after_once = doc.clone();
        doc.apply_all(&plan);

        assert_eq!(doc, after_once);
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_snapshot_roundtrip() {
        let doc = DocumentSnapshot {
            elements: vec![Element {
                id: "contact-name".to_string(),
                key: "contact.form.name".to_string(),
                kind: ElementKind::Input,
                text: None,
                placeholder: Some("Your name".to_string()),
                value: None,
                alt: None,
                aria_label: None,
            }],
            meta: DocumentMeta {
                title: "Home".to_string(),
                language: "en".to_string(),
                ..DocumentMeta::default()
            },
        };

        let json = serde_json::to_string(&doc).expect("serialize");
        let restored: DocumentSnapshot = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(doc, restored);
    }

    #[test]
    fn test_element_kind_snake_case() {
        let json = serde_json::to_string(&ElementKind::Input).expect("serialize");
        assert_eq!(json, "\"input\"");
    }

    #[test]
    fn test_mutation_tagged_representation() {
        let mutation = Mutation::SetDocumentLanguage {
            code: "fr".to_string(),
        };
        let json = serde_json::to_string(&mutation).expect("serialize");
        assert!(json.contains("\"op\":\"set_document_language\""));
    }
}
