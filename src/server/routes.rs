use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::search::SearchResponse;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// Natural-language property search
pub async fn search_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, SearchError> {
    let response = state.search.search(&request.query).await?;
    Ok(Json(response))
}

pub async fn health_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "healthy",
        message: None,
    })
}

pub async fn root_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        message: Some("Real Estate AI Search API"),
    })
}
