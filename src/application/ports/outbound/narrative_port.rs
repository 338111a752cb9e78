//! Narrative backend port - Turns one stage request into story text

use async_trait::async_trait;

use super::llm_port::LlmError;
use crate::domain::value_objects::{GameTool, Stage};

/// One stage's worth of work for the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageRequest<'a> {
    pub stage: Stage,
    /// Text the stage's agent responds to
    pub input: &'a str,
    /// Tools the backend may call while composing its answer
    pub tools: &'a [GameTool],
}

/// Errors a backend can raise while running a stage
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// The model asked for a tool outside the stage's capability set
    #[error("Model requested unknown tool '{0}'")]
    UnknownTool(String),

    /// The model kept calling tools past the turn limit
    #[error("Agent exceeded {0} model turns without a final answer")]
    MaxTurnsExceeded(u32),
}

/// Port for the service that voices a narrative stage
#[async_trait]
pub trait NarrativeBackend: Send + Sync {
    async fn run_stage(&self, request: StageRequest<'_>) -> Result<String, StageError>;
}
