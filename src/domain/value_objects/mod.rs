//! Value objects - Immutable objects defined by their attributes

mod game_tools;
mod player_choice;
mod stage;

pub use game_tools::{GameTool, ADVENTURE_EVENTS, DIE_FACES};
pub use player_choice::{ChoiceError, PlayerChoice, CHOICE_PROMPT};
pub use stage::{AdventureTurn, Stage};
