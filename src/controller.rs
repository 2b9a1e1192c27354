//! Language selection controller.
//!
//! Owns the context the rest of the pipeline reads from: the bundle loader
//! (and its cache), the persisted preference, and the current language.
//! The controller is a two-state machine: `initialize` performs the single
//! `Uninitialized -> Ready` transition on startup, and every user-initiated
//! change is a `Ready -> Ready` self-transition.
//!
//! A change is a ticket: `begin_change` claims a sequence number before the
//! bundle fetch suspends, and `complete_change` applies nothing if a newer
//! ticket was claimed in the meantime. The last request issued wins, so a
//! slow fetch for a superseded language can never overwrite newer content.

use crate::bundle::BundleLoader;
use crate::document::DocumentSnapshot;
use crate::fallback::ENGLISH_FALLBACK;
use crate::i18n::Language;
use crate::prefs::PreferenceStore;
use crate::sync;
use crate::urls::{language_from_url, localized_url};
use anyhow::{bail, Result};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::{debug, info, warn};
use url::Url;

/// Whether a language change came from page startup or from the user.
///
/// The distinction is a first-class flag threaded through every call: only
/// user-initiated changes persist the preference, rewrite the visible URL,
/// and ask the mobile navigation overlay to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// The one startup transition
    InitialLoad,
    /// A change made through the language selector
    UserSelection,
}

/// A claimed language change. Created before the bundle fetch suspends;
/// consumed by `complete_change`.
#[derive(Debug)]
pub struct ChangeTicket {
    language: Language,
    origin: ChangeOrigin,
    seq: u64,
}

impl ChangeTicket {
    /// The (already coerced) language this ticket will apply.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Where the change came from.
    pub fn origin(&self) -> ChangeOrigin {
        self.origin
    }
}

/// Result of a completed (or discarded) language change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// The language actually applied to the document
    pub language: Language,

    /// Where the change came from
    pub origin: ChangeOrigin,

    /// False when the change was superseded and nothing was applied
    pub applied: bool,

    /// True when the document was localized from baked-in fallback content
    pub used_fallback: bool,

    /// True when the caller should close the mobile navigation overlay
    pub close_nav: bool,

    /// The visible URL after the change
    pub url: Url,
}

/// The Localization Synchronizer's controlling state machine.
pub struct LocalizationController<S: PreferenceStore> {
    loader: BundleLoader,
    prefs: S,
    ready: AtomicBool,
    current_language: std::sync::Mutex<Language>,
    latest_change: AtomicU64,
}

impl<S: PreferenceStore> LocalizationController<S> {
    /// Create an uninitialized controller.
    pub fn new(loader: BundleLoader, prefs: S) -> Self {
        Self {
            loader,
            prefs,
            ready: AtomicBool::new(false),
            current_language: std::sync::Mutex::new(Language::default_language()),
            latest_change: AtomicU64::new(0),
        }
    }

    /// Whether the startup transition has happened.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// The language currently applied to the document.
    pub fn current_language(&self) -> Language {
        self.current_language
            .lock()
            .map(|guard| *guard)
            .unwrap_or_else(|_| Language::default_language())
    }

    /// Determine the initial language by priority: URL signal > persisted
    /// preference > browser-reported language > default. Each signal is
    /// coerced, so a malformed value selects the default rather than
    /// falling through.
    pub fn initial_language(&self, page_url: &Url, browser_language: Option<&str>) -> Language {
        if let Some(signal) = language_from_url(page_url) {
            debug!("Initial language from URL signal '{}'", signal);
            return Language::from_code_or_default(&signal);
        }

        if let Some(stored) = self.prefs.load() {
            debug!("Initial language from stored preference '{}'", stored);
            return Language::from_code_or_default(&stored);
        }

        if let Some(browser) = browser_language {
            debug!("Initial language from browser locale '{}'", browser);
            return Language::from_code_or_default(browser);
        }

        Language::default_language()
    }

    /// Claim a language change. The sequence number is taken here, before
    /// any suspension, which is what makes "last request issued wins" hold.
    pub fn begin_change(&self, code: &str, origin: ChangeOrigin) -> ChangeTicket {
        let language = Language::from_code_or_default(code);
        let seq = self.latest_change.fetch_add(1, Ordering::SeqCst) + 1;
        ChangeTicket {
            language,
            origin,
            seq,
        }
    }

    /// Perform the startup transition: determine the initial language, load
    /// the bundle, synchronize the document.
    ///
    /// A failed bundle load degrades to the default language's baked-in
    /// content and is reported through `used_fallback`, never as an error.
    ///
    /// # Errors
    /// Returns an error only when called more than once.
    pub async fn initialize(
        &self,
        snapshot: &mut DocumentSnapshot,
        page_url: &Url,
        browser_language: Option<&str>,
    ) -> Result<SyncOutcome> {
        if self.is_ready() {
            bail!("Localization controller is already initialized");
        }

        let language = self.initial_language(page_url, browser_language);
        info!("Initializing localization in '{}'", language.code());

        let ticket = self.begin_change(language.code(), ChangeOrigin::InitialLoad);
        self.complete_change(ticket, snapshot, page_url).await
    }

    /// Handle a user-initiated language change from the selector control.
    ///
    /// Persists the new preference, rewrites the visible URL,
    /// re-synchronizes the document, and signals the navigation overlay to
    /// close. Invalid codes are coerced to the default language.
    ///
    /// # Errors
    /// Returns an error only when the controller is not yet initialized.
    pub async fn select_language(
        &self,
        code: &str,
        snapshot: &mut DocumentSnapshot,
        page_url: &Url,
    ) -> Result<SyncOutcome> {
        let ticket = self.begin_change(code, ChangeOrigin::UserSelection);
        self.complete_change(ticket, snapshot, page_url).await
    }

    /// Complete a claimed change: load the bundle (the only suspension
    /// point), then apply if the ticket is still the latest.
    pub async fn complete_change(
        &self,
        ticket: ChangeTicket,
        snapshot: &mut DocumentSnapshot,
        page_url: &Url,
    ) -> Result<SyncOutcome> {
        if ticket.origin == ChangeOrigin::UserSelection && !self.is_ready() {
            bail!("Language selection before initialization");
        }

        let load_result = self.loader.load().await;

        if self.latest_change.load(Ordering::SeqCst) != ticket.seq {
            info!(
                "Discarding superseded change to '{}'",
                ticket.language.code()
            );
            return Ok(SyncOutcome {
                language: ticket.language,
                origin: ticket.origin,
                applied: false,
                used_fallback: false,
                close_nav: false,
                url: page_url.clone(),
            });
        }

        let (applied_language, used_fallback) = match load_result {
            Ok(bundles) => {
                let mutations = sync::apply(bundles, ticket.language, snapshot, page_url);
                debug!(
                    "Applied {} mutations for '{}'",
                    mutations.len(),
                    ticket.language.code()
                );
                (ticket.language, false)
            }
            Err(error) => {
                let fallback_language = Language::default_language();
                warn!(
                    "Bundle load failed ({}); using baked-in '{}' content",
                    error,
                    fallback_language.code()
                );
                let bundles = ENGLISH_FALLBACK.to_bundle_set();
                sync::apply(&bundles, fallback_language, snapshot, page_url);
                (fallback_language, true)
            }
        };

        let url = match ticket.origin {
            ChangeOrigin::InitialLoad => page_url.clone(),
            ChangeOrigin::UserSelection => {
                // Persist what the user chose, even when the content fell
                // back; it takes effect once the bundle becomes reachable.
                if let Err(error) = self.prefs.store(ticket.language.code()) {
                    warn!("Failed to persist language preference: {:#}", error);
                }
                localized_url(page_url, applied_language)
            }
        };

        if let Ok(mut current) = self.current_language.lock() {
            *current = applied_language;
        }

        if ticket.origin == ChangeOrigin::InitialLoad {
            self.ready.store(true, Ordering::SeqCst);
            info!(
                "Localization controller ready in '{}'",
                applied_language.code()
            );
        }

        Ok(SyncOutcome {
            language: applied_language,
            origin: ticket.origin,
            applied: true,
            used_fallback,
            close_nav: ticket.origin == ChangeOrigin::UserSelection,
            url,
        })
    }
}
