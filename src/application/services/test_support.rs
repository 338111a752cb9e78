//! Narrative backend stub shared by service and route tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::outbound::{NarrativeBackend, StageError, StageRequest};
use crate::domain::value_objects::{GameTool, Stage};

/// A stage request as the backend saw it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedStage {
    pub stage: Stage,
    pub input: String,
    pub tools: Vec<GameTool>,
}

/// Backend that answers each stage from a script and records every request
#[derive(Default)]
pub struct ScriptedBackend {
    outputs: Mutex<HashMap<Stage, Result<String, StageError>>>,
    calls: Mutex<Vec<RecordedStage>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `stage` with `output`
    pub fn with_output(self, stage: Stage, output: &str) -> Self {
        self.outputs
            .lock()
            .unwrap()
            .insert(stage, Ok(output.to_string()));
        self
    }

    /// Fail `stage` with `error`
    pub fn with_error(self, stage: Stage, error: StageError) -> Self {
        self.outputs.lock().unwrap().insert(stage, Err(error));
        self
    }

    /// The scenario turn: forest, treasure, amulet
    pub fn forest_script() -> Self {
        Self::new()
            .with_output(Stage::Narration, "You creep into the forest.")
            .with_output(
                Stage::Encounter,
                "After a tense moment, you found a treasure chest.",
            )
            .with_output(Stage::Reward, "You receive a shiny amulet.")
    }

    pub fn calls(&self) -> Vec<RecordedStage> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrativeBackend for ScriptedBackend {
    async fn run_stage(&self, request: StageRequest<'_>) -> Result<String, StageError> {
        self.calls.lock().unwrap().push(RecordedStage {
            stage: request.stage,
            input: request.input.to_string(),
            tools: request.tools.to_vec(),
        });

        self.outputs
            .lock()
            .unwrap()
            .remove(&request.stage)
            .unwrap_or_else(|| Ok(format!("{} output", request.stage)))
    }
}
