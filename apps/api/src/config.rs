use anyhow::{Context, Result};

use crate::llm_client::GROQ_CHAT_COMPLETIONS_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub llm_api_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Reject generated tables whose rows do not match the column layout.
    pub strict_table_parsing: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            llm_api_url: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| GROQ_CHAT_COMPLETIONS_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            strict_table_parsing: std::env::var("STRICT_TABLE_PARSING")
                .unwrap_or_else(|_| "false".to_string())
                .parse::<bool>()
                .context("STRICT_TABLE_PARSING must be 'true' or 'false'")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
