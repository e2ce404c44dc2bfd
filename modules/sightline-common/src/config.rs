use std::env;

/// Application configuration loaded from environment variables.
///
/// Vendor keys are optional: an empty key disables that vendor and the
/// endpoints behind it fall back to local behavior instead of erroring
/// at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // Chat completions (OpenAI-compatible)
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,

    // Search
    pub serper_api_key: String,

    // Readability extraction
    pub reader_api_key: String,
    pub reader_base_url: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Sessions
    pub session_ttl_minutes: u64,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if a numeric var fails to parse.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            serper_api_key: env::var("SERPER_API_KEY").unwrap_or_default(),
            reader_api_key: env::var("READER_API_KEY").unwrap_or_default(),
            reader_base_url: env::var("READER_BASE_URL")
                .unwrap_or_else(|_| "https://r.jina.ai".to_string()),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("SESSION_TTL_MINUTES must be a number"),
        }
    }
}
