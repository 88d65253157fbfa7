use anyhow::{Context, Result};
use axum::extract::FromRef;
use reqwest::Client;
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::Settings,
    store::{CatalogStore, SharedCatalog},
};

// Declare modules
mod cars_api;
mod config;
mod error;
mod fallback;
mod filter;
mod models;
mod routes;
mod store;
mod transform;

// Application state shared by every handler
#[derive(Clone, FromRef)]
pub(crate) struct AppState {
    settings: Arc<Settings>,
    http_client: Arc<Client>,
    catalog: SharedCatalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file first. Ignore errors (e.g., file not found)
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "car_catalog=info,tower_http=info".into()))
        .with(fmt::layer())
        .init();

    tracing::info!("Initializing car catalog server...");

    // Load configuration
    let settings = match Settings::new() {
        Ok(s) => {
            tracing::info!("Configuration loaded successfully.");
            s
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };
    let shared_settings = Arc::new(settings);

    let http_client = Arc::new(
        Client::builder()
            .user_agent(concat!("car_catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build shared reqwest client")?,
    );
    tracing::info!("Shared HTTP client created.");

    // The one catalog store for this process
    let catalog: SharedCatalog = Arc::new(RwLock::new(CatalogStore::new(shared_settings.page_size)));

    let app_state = AppState {
        settings: shared_settings.clone(),
        http_client: http_client.clone(),
        catalog: catalog.clone(),
    };

    // Initial catalog load runs in the background; requests see an empty,
    // loading catalog until it finishes
    {
        let settings = shared_settings.clone();
        tokio::spawn(async move {
            if let Err(e) = cars_api::load_catalog(&http_client, &settings, &catalog).await {
                tracing::warn!("Initial catalog load failed: {:#}", e);
            }
        });
    }

    let app = routes::create_router(app_state)
        .nest_service("/static", ServeDir::new(&shared_settings.static_dir))
        .layer(TraceLayer::new_for_http());

    // Parse the server address from settings
    let addr: SocketAddr = shared_settings
        .server_address
        .parse()
        .with_context(|| format!("Invalid server address format: {}", shared_settings.server_address))?;

    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => {
            tracing::info!("Server listening on {}", addr);
            l
        }
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into());
        }
    };

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
