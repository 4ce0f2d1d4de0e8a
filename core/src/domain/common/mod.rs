use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_LLM_ENDPOINT: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_LLM_TEMPERATURE: f32 = 0.8;

#[derive(Clone, Debug)]
pub struct FerrischefConfig {
    pub llm: LLMConfig,
    pub cookbook: CookbookConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// Bearer token for the chat-completion gateway. Checked per request.
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
    /// Extra attempts allowed for transient transport failures.
    pub max_retries: u32,
    pub retry_backoff: Duration,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_LLM_ENDPOINT.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            temperature: DEFAULT_LLM_TEMPERATURE,
            timeout: Duration::from_secs(60),
            max_retries: 2,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CookbookConfig {
    pub path: PathBuf,
    pub in_memory: bool,
}

impl Default for CookbookConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/savedRecipes.json"),
            in_memory: false,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let nanos = now.timestamp_subsec_nanos();
    let timestamp = Timestamp::from_unix(NoContext, seconds, nanos);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
