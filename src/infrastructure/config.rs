//! Application configuration

use std::env;

use anyhow::{Context, Result};

use crate::application::services::{AgentConfig, DEFAULT_MAX_TURNS};

/// Default OpenAI-compatible endpoint (Gemini)
pub const DEFAULT_LLM_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Default model for LLM requests
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.0-flash";

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenAI-compatible API base URL
    pub llm_base_url: String,
    /// Model used by every agent
    pub llm_model: String,
    /// API key sent as a bearer token
    pub llm_api_key: String,
    /// Per-request timeout for model calls
    pub llm_timeout_secs: u64,

    /// Settings shared by the narrative agents
    pub agent: AgentConfig,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let temperature = match var("LLM_TEMPERATURE") {
            Some(value) => Some(
                value
                    .parse()
                    .context("LLM_TEMPERATURE must be a number")?,
            ),
            None => None,
        };

        Ok(Self {
            llm_base_url: var("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            llm_model: var("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            llm_api_key: var("GEMINI_API_KEY")
                .context("GEMINI_API_KEY environment variable is required")?,
            llm_timeout_secs: var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "120".to_string())
                .parse()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,

            agent: AgentConfig {
                max_turns: match var("AGENT_MAX_TURNS") {
                    Some(value) => value
                        .parse()
                        .context("AGENT_MAX_TURNS must be a positive whole number")?,
                    None => DEFAULT_MAX_TURNS,
                },
                temperature,
            },

            server_port: var("SERVER_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}
