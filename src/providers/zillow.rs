use crate::models::SearchCriteria;
use crate::providers::error::ProviderError;
use crate::providers::traits::ListingProvider;
use crate::providers::types::ZillowSearchParams;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Zillow listing search via RapidAPI
pub struct ZillowClient {
    client: Client,
    api_key: String,
    api_host: String,
}

impl ZillowClient {
    /// Create a new client with the given RapidAPI credentials and request timeout
    pub fn new(api_key: String, api_host: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            api_host,
        })
    }

    fn search_url(&self) -> String {
        format!("https://{}/propertyExtendedSearch", self.api_host)
    }
}

#[async_trait]
impl ListingProvider for ZillowClient {
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Value>, ProviderError> {
        let params = ZillowSearchParams::from(criteria);
        info!(
            location = %params.location,
            home_type = params.home_type,
            price_min = ?params.price_min,
            price_max = ?params.price_max,
            "Searching Zillow"
        );

        let response = self
            .client
            .get(self.search_url())
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Zillow request failed");
                ProviderError::from(e)
            })?;

        let status = response.status();
        debug!(status = %status, "Zillow responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Zillow returned an error status");
            return Err(classify_status(status, body));
        }

        let body: Value = response.json().await.map_err(|e| {
            error!(error = %e, "Zillow response was not valid JSON");
            ProviderError::InvalidResponse(e.to_string())
        })?;

        extract_records(body, &criteria.location)
    }

    fn source_name(&self) -> &'static str {
        "Zillow"
    }
}

/// Map a non-2xx status onto a provider error
pub fn classify_status(status: StatusCode, body: String) -> ProviderError {
    match status {
        StatusCode::UNAUTHORIZED => ProviderError::Auth,
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
        _ => ProviderError::Api {
            status: status.as_u16(),
            message: body,
        },
    }
}

/// Pull the listing records out of a search response body.
///
/// Records live under `props`, or `results` on older response shapes.
pub fn extract_records(body: Value, location: &str) -> Result<Vec<Value>, ProviderError> {
    let Value::Object(mut body) = body else {
        return Err(ProviderError::InvalidResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&body)
        )));
    };

    if let Some(err) = body.get("error") {
        let message = err
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown API error")
            .to_string();
        error!(message = %message, "Zillow returned an error payload");
        return Err(ProviderError::Api {
            status: StatusCode::BAD_REQUEST.as_u16(),
            message,
        });
    }

    let records = match body.remove("props").or_else(|| body.remove("results")) {
        Some(Value::Array(records)) => records,
        _ => Vec::new(),
    };

    if records.is_empty() {
        warn!(location, "No properties found");
        return Err(ProviderError::NoResults {
            location: location.to_string(),
        });
    }

    info!(count = records.len(), "Fetched Zillow records");
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
