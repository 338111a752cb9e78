use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{AdventureTurn, PlayerChoice, CHOICE_PROMPT};

/// Request to play one turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdventureRequestDto {
    pub choice: String,
}

/// The three texts of a finished turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdventureResponseDto {
    pub run_id: Uuid,
    pub story: String,
    pub encounter: String,
    pub reward: String,
}

impl AdventureResponseDto {
    pub fn new(run_id: Uuid, turn: AdventureTurn) -> Self {
        Self {
            run_id,
            story: turn.story,
            encounter: turn.encounter,
            reward: turn.reward,
        }
    }
}

/// The question and the options the player may pick from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoicesResponseDto {
    pub prompt: String,
    pub choices: Vec<String>,
}

impl Default for ChoicesResponseDto {
    fn default() -> Self {
        Self {
            prompt: CHOICE_PROMPT.to_string(),
            choices: PlayerChoice::ALL
                .iter()
                .map(|choice| choice.as_str().to_string())
                .collect(),
        }
    }
}
