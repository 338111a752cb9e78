//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: game page and REST API routes
//! - OpenAI-compatible client: LLM integration for the narrative agents
//! - Random: thread-local RNG behind the random port
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod openai_compat;
pub mod random;
pub mod state;
