pub mod error;

pub use error::{ReaderError, Result};

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::info;

const READER_URL: &str = "https://r.jina.ai";

/// Extracted article fields as the reader service returns them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderData {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub published_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReaderResponse {
    data: ReaderData,
}

/// Client for a Jina-Reader-style extraction endpoint: GET `{base}/{url}`
/// with `Accept: application/json` returns the readable article as JSON.
pub struct ReaderClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ReaderClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
        }
    }

    pub fn default_url() -> &'static str {
        READER_URL
    }

    /// Extract the readable content of one page.
    pub async fn read(&self, url: &str) -> Result<ReaderData> {
        info!(url, "reader: extracting");

        let endpoint = format!("{}/{}", self.base_url, url);
        let mut request = self.client.get(&endpoint).header(ACCEPT, "application/json");
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ReaderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let parsed: ReaderResponse = serde_json::from_str(&text)?;

        info!(url, chars = parsed.data.content.len(), "reader: complete");

        Ok(parsed.data)
    }
}
