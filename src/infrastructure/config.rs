//! Application configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::services::GenerationSettings;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const MIN_TIMEOUT_SECS: u64 = 15;
const MAX_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enhancement switch; only an explicit "0" turns it off
    pub ai_enabled: bool,
    /// Provider credential; empty values count as absent
    pub openai_api_key: Option<String>,
    /// Model used for the rewrite
    pub openai_model: String,
    /// OpenAI-compatible API base URL
    pub openai_base_url: String,
    /// Upper bound for one rewrite call, in seconds
    pub llm_timeout_secs: u64,
    pub llm_temperature: f32,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let llm_timeout_secs: u64 = lookup("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|| "60".to_string())
            .parse()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            ai_enabled: lookup("AI_ENABLED").as_deref().map(str::trim) != Some("0"),
            openai_api_key: lookup("OPENAI_API_KEY")
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            openai_model: lookup("OPENAI_MODEL")
                .filter(|model| !model.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_timeout_secs: llm_timeout_secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS),
            llm_temperature: lookup("LLM_TEMPERATURE")
                .unwrap_or_else(|| "0.7".to_string())
                .parse()
                .context("LLM_TEMPERATURE must be a number")?,

            server_port: lookup("SERVER_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    /// The explicit settings value handed to the generation pipeline
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            ai_enabled: self.ai_enabled,
            api_key: self.openai_api_key.clone(),
            model: self.openai_model.clone(),
            temperature: self.llm_temperature,
            timeout: self.llm_timeout(),
        }
    }
}
