//! Outbound ports - Interfaces that the application requires from external systems

mod llm_port;
mod narrative_port;
mod random_port;

pub use llm_port::{
    ChatMessage, FinishReason, LlmError, LlmPort, LlmRequest, LlmResponse, MessageRole,
    TokenUsage, ToolCall, ToolDefinition,
};
pub use narrative_port::{NarrativeBackend, StageError, StageRequest};
pub use random_port::RandomPort;
