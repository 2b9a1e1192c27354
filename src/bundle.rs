//! Translation bundle loading and key resolution.
//!
//! The site ships one JSON resource (conventionally `i18n.json`) containing
//! every language's translations in a single payload:
//!
//! ```json
//! { "en": { "meta": { "title": "Home" } }, "fr": { "meta": { "title": "Accueil" } } }
//! ```
//!
//! The loader fetches that resource once per session and memoizes the whole
//! set; `resolve` walks a language's nested mapping by dotted key.

use crate::i18n::BundleValidator;
use crate::retry::{with_retry_if, RetryConfig};
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Errors surfaced by the bundle loader.
///
/// A failed load is always explicit; the loader never hands back a silently
/// empty bundle set.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The bundle source was unreachable (DNS, connect, timeout, ...)
    #[error("failed to reach translation bundle source: {0}")]
    Network(#[from] reqwest::Error),

    /// The bundle source answered with a non-success status
    #[error("translation bundle source returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    /// The payload was not valid JSON (or not a JSON object)
    #[error("failed to parse translation bundle: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Placeholder for languages absent from the payload. Resolution against it
/// yields no values, which is exactly the contract: absence of a language is
/// not an error.
static EMPTY_LANGUAGE: Value = Value::Null;

/// The full set of translation mappings, one nested mapping per language code.
///
/// Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSet {
    languages: Map<String, Value>,
}

impl BundleSet {
    /// Build a bundle set from an already-parsed JSON value.
    ///
    /// # Returns
    /// `None` if the value is not a JSON object keyed by language code.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(languages) => Some(Self { languages }),
            _ => None,
        }
    }

    /// Get the nested mapping for one language.
    ///
    /// A language missing from the payload yields an empty mapping, not an
    /// error; every key then resolves to absent.
    pub fn language(&self, code: &str) -> &Value {
        self.languages.get(code).unwrap_or(&EMPTY_LANGUAGE)
    }

    /// Language codes present in the payload, in payload order.
    pub fn language_codes(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }
}

/// Resolve a dotted key against a language's nested mapping.
///
/// Splits the key on `.` and walks the mapping one segment at a time.
/// Returns `None` (never an error) when any intermediate segment is missing
/// or not a mapping, or when the terminal value is missing, null, or not a
/// string.
///
/// Pure function; this is the piece everything else leans on.
pub fn resolve<'a>(language: &'a Value, dotted_key: &str) -> Option<&'a str> {
    let mut current = language;
    for segment in dotted_key.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    current.as_str()
}

/// Asynchronous, memoizing loader for the translation bundle.
///
/// The source delivers all languages in one payload, so the cache is keyed
/// by "has the set been fetched": the first successful `load` stores the
/// set, later calls return it without touching the network. A failed load
/// is not cached; the next call tries again.
pub struct BundleLoader {
    client: reqwest::Client,
    bundle_url: String,
    retry: RetryConfig,
    cache: OnceCell<BundleSet>,
}

impl BundleLoader {
    /// Create a loader for the given bundle URL.
    pub fn new(client: reqwest::Client, bundle_url: impl Into<String>) -> Self {
        Self {
            client,
            bundle_url: bundle_url.into(),
            retry: RetryConfig::bundle_fetch(),
            cache: OnceCell::new(),
        }
    }

    /// Override the retry configuration (shorter delays in tests).
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Whether the bundle set has already been fetched.
    pub fn is_loaded(&self) -> bool {
        self.cache.initialized()
    }

    /// Load the bundle set, fetching it on first use.
    ///
    /// Transient failures (network, 5xx, 429) are retried with backoff;
    /// other failures are reported immediately. Parse failures are never
    /// retried: the payload will not get better by asking again.
    pub async fn load(&self) -> Result<&BundleSet, BundleError> {
        self.cache
            .get_or_try_init(|| async {
                info!("Fetching translation bundle from {}", self.bundle_url);

                let bundles = with_retry_if(
                    &self.retry,
                    "Bundle fetch",
                    || self.fetch(),
                    is_retryable_error,
                )
                .await?;

                let report = BundleValidator::validate(&bundles);
                for error in &report.errors {
                    warn!("Bundle validation error: {}", error);
                }
                for warning in &report.warnings {
                    warn!("Bundle validation warning: {}", warning);
                }

                info!(
                    "Loaded translation bundle with languages {:?}",
                    bundles.language_codes()
                );
                Ok(bundles)
            })
            .await
    }

    async fn fetch(&self) -> Result<BundleSet, BundleError> {
        let response = self.client.get(&self.bundle_url).send().await?;

        if !response.status().is_success() {
            return Err(BundleError::Status {
                status: response.status(),
            });
        }

        let text = response.text().await?;
        let languages: Map<String, Value> = serde_json::from_str(&text)?;

        Ok(BundleSet { languages })
    }
}

/// Determine if a load error is retryable (network errors, 5xx, 429 rate
/// limit). Other 4xx statuses and parse errors should not be retried.
fn is_retryable_error(error: &BundleError) -> bool {
    match error {
        BundleError::Network(_) => true,
        BundleError::Status { status } => status.as_u16() == 429 || status.is_server_error(),
        BundleError::Parse(_) => false,
    }
}
