//! Language preference persistence.
//!
//! The browser original keeps one localStorage entry mapping a fixed key to
//! the last-selected language code. `PreferenceStore` is that seam as a
//! trait; the file-backed implementation stores the same single entry as a
//! tiny JSON document, and the in-memory implementation backs tests.
//!
//! Reads are forgiving: a missing or corrupt store simply means "no
//! preference", never an error. Writes report failures so the caller can
//! log them, but a failed write must not break a language change.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// Fixed key name under which the language code is stored.
pub const PREFERENCE_KEY: &str = "preferred_language";

/// Storage seam for the persisted language preference.
pub trait PreferenceStore {
    /// Read the stored language code, if any. Corrupt or unreadable
    /// storage reads as `None`.
    fn load(&self) -> Option<String>;

    /// Persist the language code.
    fn store(&self, code: &str) -> Result<()>;
}

/// On-disk shape of the preference file.
#[derive(Debug, Serialize, Deserialize)]
struct PreferenceFile {
    preferred_language: String,
}

/// JSON-file-backed preference store.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store backed by the given file path. The file is created
    /// on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        let file: PreferenceFile = serde_json::from_str(&contents).ok()?;
        debug!(
            "Loaded language preference '{}' from {}",
            file.preferred_language,
            self.path.display()
        );
        Some(file.preferred_language)
    }

    fn store(&self, code: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create preference directory {}", parent.display())
                })?;
            }
        }

        let file = PreferenceFile {
            preferred_language: code.to_string(),
        };
        let contents =
            serde_json::to_string_pretty(&file).context("Failed to serialize preference")?;

        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write preference file {}", self.path.display()))?;

        debug!(
            "Stored language preference '{}' in {}",
            code,
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory preference store for tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    code: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a language code.
    pub fn with_preference(code: &str) -> Self {
        Self {
            code: Mutex::new(Some(code.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.code.lock().ok()?.clone()
    }

    fn store(&self, code: &str) -> Result<()> {
        let mut guard = self
            .code
            .lock()
            .map_err(|_| anyhow::anyhow!("Preference store lock poisoned"))?;
        *guard = Some(code.to_string());
        Ok(())
    }
}
