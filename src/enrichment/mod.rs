//! AI-generated location overviews.
//!
//! Enrichment is additive: every failure is logged and turned into `None`,
//! never into a failed search.

pub mod groq;

pub use groq::GroqClient;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

/// Text-generation errors.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response did not contain generated text
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A backend that turns a prompt into generated text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, EnrichmentError>;
}

/// Markdown overview prompt for a "City, ST" location
pub fn overview_prompt(location: &str) -> String {
    let (city, state) = match location.split_once(',') {
        Some((city, state)) => (city.trim(), state.trim()),
        None => (location.trim(), ""),
    };
    let place = if state.is_empty() {
        city.to_string()
    } else {
        format!("{}, {}", city, state)
    };

    format!(
        "Generate a concise overview of {place} covering:\n\
         1. Brief history\n\
         2. Population and demographics\n\
         3. Education (schools and universities)\n\
         4. Economy and job market\n\
         5. Quality of life (climate, culture, amenities)\n\
         \n\
         Format as markdown with sections. Keep it factual and concise."
    )
}

/// Generate an overview of the location, or `None` if enrichment is unavailable
pub async fn location_overview(
    generator: Option<&dyn TextGenerator>,
    location: &str,
) -> Option<String> {
    let generator = generator?;
    info!(location, "Generating location overview");

    match generator.generate(&overview_prompt(location)).await {
        Ok(text) if !text.trim().is_empty() => {
            info!(location, "Generated location overview");
            Some(text)
        }
        Ok(_) => {
            warn!(location, "Location overview was empty");
            None
        }
        Err(e) => {
            warn!(location, error = %e, "Location overview failed");
            None
        }
    }
}
