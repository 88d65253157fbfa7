// Fetching the vehicle list and loading it into the catalog store

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use tokio::time::{sleep, Duration};

use crate::{
    config::Settings,
    fallback::fallback_catalog,
    models::{BackendCar, Vehicle},
    store::SharedCatalog,
    transform::transform_backend_cars,
};

pub const LOAD_ERROR_MESSAGE: &str = "Error loading vehicles. Please reload the page.";

// Fetches the backend feed once and converts it
async fn fetch_feed(client: &Client, url: &str) -> Result<Vec<Vehicle>> {
    let feed: Vec<BackendCar> = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .context("Network error fetching catalog feed")?
        .error_for_status()?
        .json()
        .await
        .context("Failed to parse catalog feed JSON")?;

    tracing::debug!(records = feed.len(), "Received catalog feed");
    Ok(transform_backend_cars(feed))
}

// Fetches the feed with retries; attempt n waits n * retry_delay before the next one
async fn fetch_from_backend(
    client: &Client,
    url: &str,
    max_attempts: u32,
    retry_delay: Duration,
) -> Result<Vec<Vehicle>> {
    let max_attempts = max_attempts.max(1);
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        tracing::info!(attempt, max_attempts, url, "Fetching catalog from backend");
        match fetch_feed(client, url).await {
            Ok(vehicles) => {
                tracing::info!(count = vehicles.len(), "Catalog fetched from backend");
                return Ok(vehicles);
            }
            Err(e) => {
                tracing::warn!(attempt, error = %format!("{e:#}"), "Catalog fetch attempt failed");
                last_error = Some(e);
                if attempt < max_attempts {
                    sleep(retry_delay * attempt).await;
                }
            }
        }
    }

    let error = last_error.unwrap_or_else(|| anyhow!("no fetch attempt was made"));
    Err(error.context(format!("Failed to fetch catalog from {} after {} attempts", url, max_attempts)))
}

/// Returns the full vehicle list.
///
/// Without a configured source the built-in catalog is used. When the backend
/// cannot be reached the built-in catalog is used too, unless
/// `use_fallback_catalog` is off.
pub async fn fetch_all_cars(client: &Client, settings: &Settings) -> Result<Vec<Vehicle>> {
    let Some(url) = settings.catalog_source_url.as_deref() else {
        tracing::info!("No catalog_source_url configured, using built-in catalog.");
        return Ok(fallback_catalog());
    };

    let retry_delay = Duration::from_millis(settings.fetch_retry_delay_ms);
    match fetch_from_backend(client, url, settings.fetch_max_retries, retry_delay).await {
        Ok(vehicles) => Ok(vehicles),
        Err(e) if settings.use_fallback_catalog => {
            tracing::warn!(error = %format!("{e:#}"), "Backend unavailable, using built-in catalog");
            Ok(fallback_catalog())
        }
        Err(e) => Err(e),
    }
}

/// Fetches the catalog and hands it to the store, keeping its load status current.
pub async fn load_catalog(client: &Client, settings: &Settings, catalog: &SharedCatalog) -> Result<usize> {
    {
        let mut store = catalog.write().await;
        store.set_loading(true);
        store.set_error(None);
    }

    tracing::info!("Loading vehicle catalog...");
    // The lock is not held while fetching
    let result = fetch_all_cars(client, settings).await;

    let mut store = catalog.write().await;
    store.set_loading(false);
    match result {
        Ok(vehicles) => {
            let count = vehicles.len();
            store.replace_all(vehicles);
            tracing::info!("{} vehicles loaded successfully", count);
            Ok(count)
        }
        Err(e) => {
            tracing::error!("Failed to load vehicles: {:#}", e);
            store.set_error(Some(LOAD_ERROR_MESSAGE.to_string()));
            Err(e)
        }
    }
}
