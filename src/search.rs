use crate::enrichment::{self, TextGenerator};
use crate::error::SearchError;
use crate::models::Listing;
use crate::normalizer;
use crate::providers::ListingProvider;
use crate::query;
use crate::render::PageWriter;
use crate::summary;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Everything returned for one natural-language search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<Listing>,
    pub static_page_url: Option<String>,
    pub search_summary: String,
    pub location_overview: Option<String>,
}

/// Runs the interpret -> fetch -> normalize -> enrich -> render pipeline
#[derive(Clone)]
pub struct SearchService {
    provider: Arc<dyn ListingProvider>,
    generator: Option<Arc<dyn TextGenerator>>,
    pages: PageWriter,
}

impl SearchService {
    pub fn new(
        provider: Arc<dyn ListingProvider>,
        generator: Option<Arc<dyn TextGenerator>>,
        pages: PageWriter,
    ) -> Self {
        Self {
            provider,
            generator,
            pages,
        }
    }

    pub fn pages(&self) -> &PageWriter {
        &self.pages
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        info!(query, "Received search query");

        let criteria = query::interpret(query)?;
        let search_summary = summary::summarize(&criteria);

        let raw_records = self.provider.search(&criteria).await?;
        info!(
            source = self.provider.source_name(),
            count = raw_records.len(),
            "Fetched raw listings"
        );
        let results = normalizer::normalize(&raw_records, &criteria.location);

        let location_overview =
            enrichment::location_overview(self.generator.as_deref(), &criteria.location).await;

        if results.is_empty() {
            warn!(query, "No listings survived normalization");
            return Ok(SearchResponse {
                results,
                static_page_url: None,
                search_summary,
                location_overview,
            });
        }

        let static_page_url = self.pages.write(&results, query, &search_summary).await;
        info!(count = results.len(), "Search complete");

        Ok(SearchResponse {
            results,
            static_page_url,
            search_summary,
            location_overview,
        })
    }
}
