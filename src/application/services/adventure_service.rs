//! Adventure Service - Plays one turn of the forest adventure
//!
//! A turn runs the three narrative stages strictly in order against the
//! narrative backend:
//!
//! 1. Narration, fed the player's choice
//! 2. Encounter, fed a fixed prompt and allowed to roll dice and draw events
//! 3. Reward, fed a fixed prompt
//!
//! Stages are independent vignettes: no stage's output is passed to a later
//! one. The first failing stage aborts the turn and nothing partial is
//! returned.

use std::sync::Arc;

use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::application::ports::outbound::{NarrativeBackend, StageError, StageRequest};
use crate::domain::value_objects::{AdventureTurn, Stage};

/// Errors that end a turn
#[derive(Debug, thiserror::Error)]
pub enum AdventureError {
    /// A stage could not produce its text
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: StageError,
    },
}

/// Orchestrates the three stages of a turn
#[derive(Clone)]
pub struct AdventureService {
    backend: Arc<dyn NarrativeBackend>,
}

impl AdventureService {
    pub fn new(backend: Arc<dyn NarrativeBackend>) -> Self {
        Self { backend }
    }

    /// Play a full turn for the given choice
    ///
    /// The choice text is handed to the narrator as-is; callers that only
    /// accept the offered options validate it first with
    /// [`PlayerChoice`](crate::domain::value_objects::PlayerChoice).
    #[instrument(skip(self, run_id), fields(run_id = %run_id))]
    pub async fn play_turn(
        &self,
        run_id: Uuid,
        choice: &str,
    ) -> Result<AdventureTurn, AdventureError> {
        info!("Starting adventure turn");

        let story = self.run_stage(Stage::Narration, choice).await?;
        let encounter = self.run_stage(Stage::Encounter, "").await?;
        let reward = self.run_stage(Stage::Reward, "").await?;

        info!("Adventure turn complete");
        Ok(AdventureTurn {
            story,
            encounter,
            reward,
        })
    }

    /// Run one stage; `choice` is used only when the stage has no fixed prompt
    async fn run_stage(&self, stage: Stage, choice: &str) -> Result<String, AdventureError> {
        let request = StageRequest {
            stage,
            input: stage.fixed_prompt().unwrap_or(choice),
            tools: stage.tools(),
        };

        info!(%stage, tools = request.tools.len(), "Running stage");
        self.backend.run_stage(request).await.map_err(|source| {
            error!(%stage, error = %source, "Stage failed, aborting turn");
            AdventureError::Stage { stage, source }
        })
    }
}
