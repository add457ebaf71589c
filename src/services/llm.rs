//! Pass-through proxy to an OpenAI-compatible chat-completion endpoint (DeepSeek).

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::LlmError;

pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Incoming chat request; `messages` is validated rather than typed so malformed
/// bodies get the documented 400 instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Option<Value>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
}

pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Forward the chat request and return the upstream status with its JSON body unchanged.
    pub async fn chat(&self, request: ChatRequest) -> Result<(u16, Value), LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;
        let messages = match request.messages {
            Some(Value::Array(messages)) => messages,
            _ => {
                return Err(LlmError::Validation(
                    "messages required (OpenAI-format array)".to_string(),
                ))
            }
        };

        let model = request.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let body = json!({
            "model": model,
            "messages": messages,
            "temperature": request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        });

        debug!(model = %model, "Forwarding chat completion");
        let resp = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let data: Value = resp
            .json()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;
        Ok((status, data))
    }
}
