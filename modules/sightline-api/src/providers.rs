//! Trait seams for the vendor clients.
//!
//! Handlers talk to `ChatProvider`, `SearchProvider`, and `PageReader`
//! instead of the client crates directly, so tests can swap in the
//! HashMap-backed mocks from `testing` and run with no network.

use ai_client::{AiClient, Message};
use anyhow::Result;
use async_trait::async_trait;
use reader_client::ReaderClient;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serper_client::{SerpResponse, SerperClient};
use sightline_common::ReadablePage;

const SUGGEST_SYSTEM_PROMPT: &str = r#"You suggest the search prompts shoppers type into AI assistants while deciding what to buy.

Given a brand and a topic, propose five short, natural prompts where the brand would want to be mentioned in the answer. Mix transactional and comparison phrasings. Keep each prompt under fifteen words."#;

/// One suggested AI-search prompt for a brand to track.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PromptIdea {
    pub prompt: String,
    pub rationale: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PromptIdeaList {
    pub suggestions: Vec<PromptIdea>,
}

/// LLM-backed conversation and prompt generation.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Run one chat completion over the full conversation.
    async fn chat(&self, messages: &[Message]) -> Result<String>;

    /// Generate prompt ideas for a brand/topic pair.
    async fn suggest_prompts(&self, brand: &str, topic: &str) -> Result<Vec<PromptIdea>>;
}

#[async_trait]
impl ChatProvider for AiClient {
    async fn chat(&self, messages: &[Message]) -> Result<String> {
        Ok(AiClient::chat(self, messages).await?)
    }

    async fn suggest_prompts(&self, brand: &str, topic: &str) -> Result<Vec<PromptIdea>> {
        let user = format!("Brand: {brand}\nTopic: {topic}");
        let ideas: PromptIdeaList = self.extract(SUGGEST_SYSTEM_PROMPT, &user).await?;
        Ok(ideas.suggestions)
    }
}

/// Google SERP lookups.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, num: usize) -> Result<SerpResponse>;
}

#[async_trait]
impl SearchProvider for SerperClient {
    async fn search(&self, query: &str, num: usize) -> Result<SerpResponse> {
        Ok(SerperClient::search(self, query, num).await?)
    }
}

/// Readability extraction for a single URL.
#[async_trait]
pub trait PageReader: Send + Sync {
    async fn read(&self, url: &str) -> Result<ReadablePage>;
}

#[async_trait]
impl PageReader for ReaderClient {
    async fn read(&self, url: &str) -> Result<ReadablePage> {
        let data = ReaderClient::read(self, url).await?;
        Ok(ReadablePage {
            url: if data.url.is_empty() { url.to_string() } else { data.url },
            title: data.title,
            content: data.content,
            description: data.description,
            site_name: data.site_name,
            published_time: data.published_time,
        })
    }
}
