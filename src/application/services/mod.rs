//! Application services - Use case implementations
//!
//! This module contains the application services that implement the
//! adventure's use cases. Services depend only on outbound ports, so the
//! narrative backend and random source can be swapped out in tests.

pub mod adventure_service;
pub mod agent_runner;
pub mod tool_execution_service;

#[cfg(test)]
pub mod test_support;

pub use adventure_service::{AdventureError, AdventureService};
pub use agent_runner::{AgentConfig, AgentRunner, DEFAULT_MAX_TURNS};
pub use tool_execution_service::ToolExecutionService;
