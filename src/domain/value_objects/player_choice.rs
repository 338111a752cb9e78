//! The player's decision at the forest's edge

use std::fmt;
use std::str::FromStr;

/// Question shown to the player before a turn
pub const CHOICE_PROMPT: &str = "🌲 Do you want to enter the forest or turn back?";

/// One of the two paths offered to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerChoice {
    EnterForest,
    TurnBack,
}

impl PlayerChoice {
    /// All choices, in the order they are offered
    pub const ALL: [PlayerChoice; 2] = [PlayerChoice::EnterForest, PlayerChoice::TurnBack];

    /// The label the player sees, which is also the text handed to the narrator
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnterForest => "Enter the forest",
            Self::TurnBack => "Turn back",
        }
    }
}

impl fmt::Display for PlayerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerChoice {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ChoiceError::Malformed(s.to_string()))
    }
}

/// Errors raised when text does not name one of the offered choices
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    #[error("Unknown choice '{0}', expected 'Enter the forest' or 'Turn back'")]
    Malformed(String),
}
