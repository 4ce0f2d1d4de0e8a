use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use ferrischef_core::domain::common::{
    CookbookConfig, DEFAULT_LLM_ENDPOINT, DEFAULT_LLM_MODEL, FerrischefConfig, LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "ferrischef-api", version, about = "FerrisChef recipe API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub cookbook: CookbookArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list, `*` allows any origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(long = "llm-api-key", env = "LLM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = DEFAULT_LLM_MODEL)]
    pub model: String,

    #[arg(long = "llm-endpoint", env = "LLM_ENDPOINT", default_value = DEFAULT_LLM_ENDPOINT)]
    pub endpoint: String,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.8)]
    pub temperature: f32,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    #[arg(long = "llm-max-retries", env = "LLM_MAX_RETRIES", default_value_t = 2)]
    pub max_retries: u32,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CookbookArgs {
    #[arg(
        long = "cookbook-path",
        env = "COOKBOOK_PATH",
        default_value = "./data/savedRecipes.json"
    )]
    pub path: PathBuf,

    #[arg(
        long = "cookbook-in-memory",
        env = "COOKBOOK_IN_MEMORY",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub in_memory: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(
        long = "log-json",
        env = "LOG_JSON",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub json: bool,
}

impl From<Args> for FerrischefConfig {
    fn from(args: Args) -> Self {
        FerrischefConfig {
            llm: LLMConfig {
                api_key: args.llm.api_key,
                endpoint: args.llm.endpoint,
                model: args.llm.model,
                temperature: args.llm.temperature,
                timeout: Duration::from_secs(args.llm.timeout_secs),
                max_retries: args.llm.max_retries,
                ..Default::default()
            },
            cookbook: CookbookConfig {
                path: args.cookbook.path,
                in_memory: args.cookbook.in_memory,
            },
        }
    }
}
