use anyhow::{Context, Result};
use l10n_sync::bundle::BundleLoader;
use l10n_sync::config::Config;
use l10n_sync::controller::LocalizationController;
use l10n_sync::document::DocumentSnapshot;
use l10n_sync::prefs::FilePreferenceStore;
use std::time::Duration;
use tracing::info;
use url::Url;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("l10n_sync=info".parse()?),
        )
        .init();

    info!("Starting localization synchronizer");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Step 1: Read the page snapshot
    info!("Reading page snapshot from {}", config.snapshot_file);
    let contents = std::fs::read_to_string(&config.snapshot_file)
        .with_context(|| format!("Failed to read page snapshot {}", config.snapshot_file))?;
    let mut snapshot: DocumentSnapshot =
        serde_json::from_str(&contents).context("Failed to parse page snapshot")?;

    // Step 2: Build the controller
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;
    let loader = BundleLoader::new(client, config.bundle_url.clone());
    let prefs = FilePreferenceStore::new(&config.preferences_file);
    let controller = LocalizationController::new(loader, prefs);

    // Step 3: Resolve the language and synchronize
    let page_url = Url::parse(&config.site_base_url)
        .with_context(|| format!("Invalid SITE_BASE_URL {}", config.site_base_url))?;
    let browser_language = sys_locale::get_locale();
    let outcome = controller
        .initialize(&mut snapshot, &page_url, browser_language.as_deref())
        .await?;

    if outcome.used_fallback {
        info!(
            "Bundle unavailable; document localized from baked-in '{}' content",
            outcome.language.code()
        );
    } else {
        info!("Document localized in '{}'", outcome.language.code());
    }

    // Step 4: Emit the localized snapshot
    let output =
        serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
    println!("{}", output);

    Ok(())
}
