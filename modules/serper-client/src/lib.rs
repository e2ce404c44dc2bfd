pub mod error;
pub mod types;

pub use error::{Result, SerperError};
pub use types::{
    AiOverviewBlock, AnswerBox, OrganicResult, OverviewReference, RelatedQuestion, RelatedSearch,
    SerpResponse, TextBlock,
};

use std::time::Duration;

use tracing::info;

const SEARCH_URL: &str = "https://google.serper.dev/search";

pub struct SerperClient {
    api_key: String,
    client: reqwest::Client,
}

impl SerperClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Run a Google search and return the typed SERP.
    pub async fn search(&self, query: &str, num: usize) -> Result<SerpResponse> {
        info!(query, num, "serper: querying");

        let body = serde_json::json!({
            "q": query,
            "num": num,
        });

        let resp = self
            .client
            .post(SEARCH_URL)
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SerperError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let data: SerpResponse = serde_json::from_str(&text)?;

        info!(query, organic = data.organic.len(), "serper: complete");

        Ok(data)
    }
}
