//! Domain layer - Core game rules with no external dependencies
//!
//! This layer contains:
//! - Value Objects: player choices, narrative stages, game tools

pub mod value_objects;
