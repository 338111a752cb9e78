//! Game tools that can be called by the LLM
//!
//! Defines the helper mechanics an agent may invoke while composing its
//! text. Both tools take no arguments and answer with a single string.

/// Flavor-text events the event picker draws from
pub const ADVENTURE_EVENTS: [&str; 4] = [
    "You encountered a dragon!",
    "You found a treasure chest.",
    "You fell into a trap!",
    "You met a mysterious wizard.",
];

/// Number of faces on the die rolled by [`GameTool::RollDice`]
pub const DIE_FACES: i32 = 6;

/// Available tools an agent can call
///
/// # Examples
///
/// ```ignore
/// use fantasy_adventure::domain::value_objects::GameTool;
///
/// let tool = GameTool::from_name("roll_dice");
/// assert_eq!(tool, Some(GameTool::RollDice));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameTool {
    /// Roll a six-sided die
    RollDice,
    /// Pick a random adventure event
    GenerateEvent,
}

impl GameTool {
    /// Get the tool name for this variant
    pub fn name(&self) -> &'static str {
        match self {
            Self::RollDice => "roll_dice",
            Self::GenerateEvent => "generate_event",
        }
    }

    /// Description handed to the model alongside the name
    pub fn description(&self) -> &'static str {
        match self {
            Self::RollDice => "Roll a six-sided die and report the result.",
            Self::GenerateEvent => "Generate a random adventure event.",
        }
    }

    /// Look up a tool by its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "roll_dice" => Some(Self::RollDice),
            "generate_event" => Some(Self::GenerateEvent),
            _ => None,
        }
    }

    /// Check if this tool is in the given capability set
    pub fn is_allowed(&self, allowed_tools: &[GameTool]) -> bool {
        allowed_tools.contains(self)
    }
}
