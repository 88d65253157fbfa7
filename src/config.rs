// Loading configuration with the 'config' crate and 'dotenv'

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server_address: String,
    // Backend endpoint returning the raw car feed; the built-in catalog is used when unset
    pub catalog_source_url: Option<String>,
    pub page_size: usize,
    pub fetch_max_retries: u32,
    pub fetch_retry_delay_ms: u64,
    pub use_fallback_catalog: bool,
    pub static_dir: String,
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let builder = Self::defaults(Config::builder())?
            // Load from a configuration file (e.g., config.toml)
            .add_source(File::with_name("config").required(false))
            // Load from environment variables (e.g., CATALOG_PAGE_SIZE)
            .add_source(
                Environment::with_prefix("CATALOG")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    fn defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(builder
            .set_default("server_address", "127.0.0.1:3000")?
            .set_default("page_size", 5)?
            .set_default("fetch_max_retries", 2)?
            .set_default("fetch_retry_delay_ms", 1000)?
            .set_default("use_fallback_catalog", true)?
            .set_default("static_dir", "static")?)
    }
}
