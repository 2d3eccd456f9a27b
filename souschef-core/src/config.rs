use anyhow::{Context, Result};

/// Default chat model used when MODEL_NAME env var is not set
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default API base URL when OPENAI_API_BASE env var is not set
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub model_name: String,
}

impl Config {
    /// Load configuration from .env file and environment
    ///
    /// Values already present in the process environment take
    /// precedence over the .env file; a missing .env file is not an
    /// error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;

        let api_base = std::env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let model_name = resolve_model(std::env::var("MODEL_NAME").ok());

        Ok(Self {
            api_key,
            api_base,
            model_name,
        })
    }
}

/// Model fallback rule: an unset or empty MODEL_NAME means the default.
fn resolve_model(var: Option<String>) -> String {
    match var {
        Some(name) if !name.trim().is_empty() => name,
        _ => DEFAULT_MODEL.to_string(),
    }
}
