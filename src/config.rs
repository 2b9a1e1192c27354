use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Bundle source
    pub bundle_url: String,

    // Site
    pub site_base_url: String,

    // Persistence
    pub preferences_file: String,

    // Page snapshot consumed by the CLI
    pub snapshot_file: String,

    // HTTP
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Bundle source - the single i18n.json resource
            bundle_url: std::env::var("BUNDLE_URL").context("BUNDLE_URL not set")?,

            // Site
            site_base_url: std::env::var("SITE_BASE_URL")
                .unwrap_or_else(|_| "https://example.com/".to_string()),

            // Persistence
            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or_else(|_| "data/language.json".to_string()),

            // Page snapshot
            snapshot_file: std::env::var("PAGE_SNAPSHOT")
                .unwrap_or_else(|_| "data/page.json".to_string()),

            // HTTP
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}
