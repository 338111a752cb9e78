//! Shared application state

use std::sync::Arc;

use crate::application::ports::outbound::NarrativeBackend;
use crate::application::services::{AdventureService, AgentRunner};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::openai_compat::OpenAiCompatClient;
use crate::infrastructure::random::SystemRandom;

/// Shared application state
pub struct AppState {
    pub adventure_service: AdventureService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        // Initialize LLM client
        let llm_client = OpenAiCompatClient::new(
            &config.llm_base_url,
            &config.llm_model,
            &config.llm_api_key,
            config.llm_timeout_secs,
        );

        let backend = AgentRunner::new(llm_client, SystemRandom::new(), &config.agent);
        Self::with_backend(Arc::new(backend))
    }

    /// Build state around an already-constructed narrative backend
    pub fn with_backend(backend: Arc<dyn NarrativeBackend>) -> Self {
        Self {
            adventure_service: AdventureService::new(backend),
        }
    }
}
