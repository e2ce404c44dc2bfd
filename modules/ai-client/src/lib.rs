pub mod error;
pub mod types;

mod schema;

pub use error::{AiError, Result};
pub use types::{Message, MessageRole};

use std::time::Duration;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::debug;

use types::{ChatRequest, ChatResponse, JsonSchemaFormat, ResponseFormat};

const OPENAI_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Reply length cap for plain chat turns.
const MAX_TOKENS: u32 = 1024;

/// Chat-completions client for any OpenAI-compatible endpoint.
pub struct AiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
    base_url: String,
}

impl AiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            http,
            base_url: OPENAI_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one chat completion over the given conversation and return the
    /// first choice's content.
    pub async fn chat(&self, messages: &[Message]) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            temperature: Some(0.7),
            max_tokens: Some(MAX_TOKENS),
            response_format: None,
        };
        self.send(&request).await
    }

    /// Structured output: ask for JSON conforming to `T`'s schema and parse
    /// the reply into `T`. Temperature is pinned to 0 so extraction stays
    /// deterministic.
    pub async fn extract<T: JsonSchema + DeserializeOwned>(
        &self,
        system: &str,
        user: &str,
    ) -> Result<T> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message::system(system), Message::user(user)],
            temperature: Some(0.0),
            max_tokens: None,
            response_format: Some(ResponseFormat {
                format_type: "json_schema".to_string(),
                json_schema: JsonSchemaFormat {
                    name: "structured_response".to_string(),
                    strict: true,
                    schema: schema::response_schema::<T>(),
                },
            }),
        };
        let content = self.send(&request).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn send(&self, request: &ChatRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %request.model, "chat completions request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;
        chat.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(AiError::EmptyResponse)
    }
}
