use crate::models::SearchCriteria;
use crate::providers::error::ProviderError;
use async_trait::async_trait;
use serde_json::Value;

/// Common trait for listing data providers
#[async_trait]
pub trait ListingProvider: Send + Sync {
    /// Search for raw listing records matching the criteria
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Value>, ProviderError>;

    /// Get the name of the provider
    fn source_name(&self) -> &'static str;
}
