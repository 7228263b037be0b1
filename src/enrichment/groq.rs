use crate::enrichment::{EnrichmentError, TextGenerator};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const SYSTEM_PROMPT: &str =
    "You are a knowledgeable assistant that provides accurate, concise information about locations.";

#[derive(Debug, Clone, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Groq chat-completions client (OpenAI-compatible API)
pub struct GroqClient {
    http_client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Set a custom base URL (for proxies or other OpenAI-compatible hosts).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.3,
            max_tokens: 1000,
        }
    }
}

#[async_trait]
impl TextGenerator for GroqClient {
    async fn generate(&self, prompt: &str) -> Result<String, EnrichmentError> {
        debug!(model = %self.model, "Sending Groq chat completion");

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&self.request(prompt))
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EnrichmentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| EnrichmentError::Parse(format!("Failed to deserialize response: {}", e)))?;

        first_choice_text(body)
    }
}

fn first_choice_text(body: ChatResponse) -> Result<String, EnrichmentError> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| EnrichmentError::Parse("No content in response".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> GroqClient {
        GroqClient::new(
            "key".to_string(),
            "llama-3.3-70b-versatile".to_string(),
            Duration::from_secs(30),
        )
        .unwrap()
    }

    #[test]
    fn test_request_body() {
        let client = client();
        let body = serde_json::to_value(client.request("tell me about Kapaa")).unwrap();
        assert_eq!(body["model"], "llama-3.3-70b-versatile");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "tell me about Kapaa");
    }

    #[test]
    fn test_first_choice_text() {
        let body: ChatResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Overview" } }]
        }))
        .unwrap();
        assert_eq!(first_choice_text(body).unwrap(), "Overview");

        let body: ChatResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(matches!(first_choice_text(body), Err(EnrichmentError::Parse(_))));
    }

    #[test]
    fn test_custom_base_url() {
        let client = client().with_base_url("http://localhost:9999/v1");
        assert_eq!(client.base_url, "http://localhost:9999/v1");
    }
}
