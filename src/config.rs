use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub zillow_api_key: String,
    pub zillow_api_host: String,
    /// Enrichment is disabled when unset
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    /// OpenAI-compatible endpoint override
    pub groq_base_url: Option<String>,
    pub port: u16,
    pub static_pages_dir: String,
    pub provider_timeout: Duration,
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            zillow_api_key: var("ZILLOW_API_KEY").context("ZILLOW_API_KEY must be set")?,
            zillow_api_host: var("ZILLOW_API_HOST").context("ZILLOW_API_HOST must be set")?,
            groq_api_key: var("GROQ_API_KEY"),
            groq_model: var("GROQ_MODEL")
                .unwrap_or_else(|| "llama-3.3-70b-versatile".to_string()),
            groq_base_url: var("GROQ_BASE_URL"),
            port: var("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            static_pages_dir: var("STATIC_PAGES_DIR")
                .unwrap_or_else(|| "static_pages".to_string()),
            provider_timeout: Duration::from_secs(
                var("PROVIDER_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .context("PROVIDER_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            allowed_origins: var("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}
