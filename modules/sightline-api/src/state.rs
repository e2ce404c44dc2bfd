use std::sync::Arc;

use ai_client::AiClient;
use reader_client::ReaderClient;
use serper_client::SerperClient;
use sightline_common::{fixtures, Config, DemoProduct};
use sightline_store::SessionStore;
use tracing::warn;

use crate::fetch::DirectReader;
use crate::providers::{ChatProvider, PageReader, SearchProvider};

/// Shared application state behind every handler.
///
/// Chat and search are optional: a missing key leaves the slot `None` and
/// the endpoints behind it fall back instead of erroring. Reading always
/// works, either through the configured vendor or the direct fetcher.
pub struct AppState {
    pub store: SessionStore,
    pub chat: Option<Arc<dyn ChatProvider>>,
    pub search: Option<Arc<dyn SearchProvider>>,
    pub reader: Arc<dyn PageReader>,
    pub catalog: Vec<DemoProduct>,
}

impl AppState {
    pub fn new(
        store: SessionStore,
        chat: Option<Arc<dyn ChatProvider>>,
        search: Option<Arc<dyn SearchProvider>>,
        reader: Arc<dyn PageReader>,
    ) -> Self {
        Self {
            store,
            chat,
            search,
            reader,
            catalog: fixtures::demo_catalog(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let chat: Option<Arc<dyn ChatProvider>> = if config.openai_api_key.is_empty() {
            warn!("OPENAI_API_KEY not set, chat endpoints will serve fallbacks");
            None
        } else {
            Some(Arc::new(
                AiClient::new(config.openai_api_key.clone())
                    .with_base_url(&config.openai_base_url)
                    .with_model(config.openai_model.clone()),
            ))
        };

        let search: Option<Arc<dyn SearchProvider>> = if config.serper_api_key.is_empty() {
            warn!("SERPER_API_KEY not set, search endpoints will be unavailable");
            None
        } else {
            Some(Arc::new(SerperClient::new(&config.serper_api_key)))
        };

        let reader: Arc<dyn PageReader> = if config.reader_api_key.is_empty() {
            Arc::new(DirectReader::new())
        } else {
            Arc::new(ReaderClient::new(
                &config.reader_base_url,
                Some(&config.reader_api_key),
            ))
        };

        Self::new(
            SessionStore::new(config.session_ttl_minutes),
            chat,
            search,
            reader,
        )
    }
}
