//! Mock providers for handler tests.
//!
//! Each mock is a HashMap keyed on the request's distinguishing input and
//! errors loudly on anything unregistered, so a test that drifts from its
//! fixtures fails with a useful message instead of a silent default.

use std::collections::HashMap;

use ai_client::{Message, MessageRole};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serper_client::SerpResponse;
use sightline_common::ReadablePage;

use crate::providers::{ChatProvider, PageReader, PromptIdea, SearchProvider};

/// Chat mock keyed by the latest user message.
#[derive(Default)]
pub struct MockChat {
    replies: HashMap<String, String>,
    suggestions: Vec<PromptIdea>,
    fail: bool,
}

impl MockChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_reply(mut self, user_message: &str, reply: &str) -> Self {
        self.replies
            .insert(user_message.to_string(), reply.to_string());
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<PromptIdea>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Every call errors, for exercising fallback paths.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl ChatProvider for MockChat {
    async fn chat(&self, messages: &[Message]) -> Result<String> {
        if self.fail {
            return Err(anyhow!("MockChat: forced failure"));
        }
        let last = messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .ok_or_else(|| anyhow!("MockChat: no user message in conversation"))?;
        self.replies
            .get(&last.content)
            .cloned()
            .ok_or_else(|| anyhow!("MockChat: no reply registered for {:?}", last.content))
    }

    async fn suggest_prompts(&self, _brand: &str, _topic: &str) -> Result<Vec<PromptIdea>> {
        if self.fail {
            return Err(anyhow!("MockChat: forced failure"));
        }
        Ok(self.suggestions.clone())
    }
}

/// Search mock keyed by query.
#[derive(Default)]
pub struct MockSearch {
    responses: HashMap<String, SerpResponse>,
}

impl MockSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_search(mut self, query: &str, response: SerpResponse) -> Self {
        self.responses.insert(query.to_string(), response);
        self
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    async fn search(&self, query: &str, _num: usize) -> Result<SerpResponse> {
        self.responses
            .get(query)
            .cloned()
            .ok_or_else(|| anyhow!("MockSearch: no response registered for {query:?}"))
    }
}

/// Reader mock keyed by url.
#[derive(Default)]
pub struct MockReader {
    pages: HashMap<String, ReadablePage>,
}

impl MockReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_page(mut self, url: &str, page: ReadablePage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }
}

#[async_trait]
impl PageReader for MockReader {
    async fn read(&self, url: &str) -> Result<ReadablePage> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("MockReader: no page registered for {url:?}"))
    }
}
