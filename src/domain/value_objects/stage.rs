//! Narrative stages of a turn
//!
//! A turn always runs Narration, then Encounter, then Reward. Each stage is
//! voiced by its own agent with fixed instructions. Only the Encounter stage
//! may call game tools.

use std::fmt;

use super::game_tools::GameTool;

/// Input for the Encounter stage
pub const ENCOUNTER_PROMPT: &str = "Start encounter";

/// Input for the Reward stage
pub const REWARD_PROMPT: &str = "Give reward";

const ENCOUNTER_TOOLS: [GameTool; 2] = [GameTool::RollDice, GameTool::GenerateEvent];

/// One of the three ordered steps of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Narration,
    Encounter,
    Reward,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Narration => "narration",
            Self::Encounter => "encounter",
            Self::Reward => "reward",
        }
    }

    /// Name of the agent that voices this stage
    pub fn agent_name(&self) -> &'static str {
        match self {
            Self::Narration => "NarratorAgent",
            Self::Encounter => "MonsterAgent",
            Self::Reward => "ItemAgent",
        }
    }

    /// System instructions for the stage's agent
    pub fn instructions(&self) -> &'static str {
        match self {
            Self::Narration => "You narrate the adventure. Ask the player for choices.",
            Self::Encounter => {
                "You handle monster encounters using roll_dice and generate_event."
            }
            Self::Reward => "You provide rewards or items to the player.",
        }
    }

    /// Fixed input text, or `None` when the stage is fed the player's choice
    pub fn fixed_prompt(&self) -> Option<&'static str> {
        match self {
            Self::Narration => None,
            Self::Encounter => Some(ENCOUNTER_PROMPT),
            Self::Reward => Some(REWARD_PROMPT),
        }
    }

    /// Capability set exposed to the backend while this stage runs
    pub fn tools(&self) -> &'static [GameTool] {
        match self {
            Self::Encounter => &ENCOUNTER_TOOLS,
            Self::Narration | Self::Reward => &[],
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three texts produced by one turn, in stage order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdventureTurn {
    pub story: String,
    pub encounter: String,
    pub reward: String,
}
