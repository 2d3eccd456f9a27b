//! Chat completions API client
//!
//! Typed request/response pairs for an OpenAI-compatible
//! `/chat/completions` endpoint, plus the single network call the
//! rest of the crate builds on.

use crate::config::Config;
use crate::http::get_client;
use crate::models::Message;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Request payload for the chat completions API
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new chat request from a full message history
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the temperature for sampling
    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set the maximum number of tokens in the response
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }
}

/// Response from the chat completions API
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Get the content of the first choice, if available
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }

    /// Get the content of the first choice, or an error if the choice
    /// list is empty
    pub fn content_or_err(&self) -> Result<&str> {
        self.content()
            .context("No completion choices in API response")
    }
}

/// A single response choice
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The message content in a response choice
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Send a chat completion request
///
/// One blocking round trip, no retries. Any transport failure,
/// non-success status, or undecodable body propagates to the caller.
pub async fn chat_completion(request: &ChatRequest, config: &Config) -> Result<ChatResponse> {
    use std::time::Instant;

    let client = get_client();
    let url = format!("{}/chat/completions", config.api_base.trim_end_matches('/'));
    let start = Instant::now();

    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", config.api_key))
        .header("Content-Type", "application/json")
        .json(request)
        .send()
        .await
        .context("Failed to send request to completions API")?;

    let duration_ms = start.elapsed().as_millis();

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        warn!(
            status = %status,
            duration_ms = %duration_ms,
            "Completions API error"
        );
        anyhow::bail!("Completions API error {}: {}", status, text);
    }

    let result: ChatResponse = response
        .json()
        .await
        .context("Failed to parse completions API response")?;

    info!(
        model = %request.model,
        messages = request.messages.len(),
        duration_ms = %duration_ms,
        total_tokens = result.usage.as_ref().map(|u| u.total_tokens).unwrap_or(0),
        "Completion call finished"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_builder() {
        let request = ChatRequest::new("gpt-4o-mini", vec![Message::user("Hello")])
            .temperature(0.7)
            .max_tokens(100);

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_tokens, Some(100));
    }

    #[test]
    fn test_request_omits_unset_knobs_on_the_wire() {
        let request = ChatRequest::new("gpt-4o-mini", vec![Message::user("Hi")]);
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains(r#""model":"gpt-4o-mini""#));
        assert!(json.contains(r#""role":"user""#));
        assert!(!json.contains("temperature"));
        assert!(!json.contains("max_tokens"));
    }

    #[test]
    fn test_parse_response() {
        let body = r###"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "## Omelette"},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49}
        }"###;

        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.content(), Some("## Omelette"));
        assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
        assert_eq!(response.usage.as_ref().unwrap().total_tokens, 49);
    }

    #[test]
    fn test_empty_choices_is_an_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.content().is_none());
        assert!(response.content_or_err().is_err());
    }

    #[test]
    fn test_role_enum_survives_request_serialization() {
        let request = ChatRequest::new(
            "gpt-4o-mini",
            vec![Message::system("rules"), Message::user("eggs?")],
        );
        let value: serde_json::Value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
    }
}
