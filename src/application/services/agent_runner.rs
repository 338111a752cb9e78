//! Agent Runner - Voices narrative stages with an LLM
//!
//! Each stage is played by an agent: the stage's instructions become the
//! system prompt and the stage input becomes the single user message. When a
//! stage exposes tools, the runner keeps calling the model, executing any
//! tool calls it asks for and feeding the results back, until the model
//! answers with plain text.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{
    ChatMessage, LlmPort, LlmRequest, NarrativeBackend, RandomPort, StageError, StageRequest,
    ToolCall, ToolDefinition,
};
use crate::application::services::tool_execution_service::ToolExecutionService;
use crate::domain::value_objects::{GameTool, Stage};

/// Default cap on model calls per stage
pub const DEFAULT_MAX_TURNS: u32 = 10;

/// Settings shared by every agent
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// Maximum model calls a single stage may make
    pub max_turns: u32,
    /// Sampling temperature, `None` to use the model default
    pub temperature: Option<f32>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            temperature: None,
        }
    }
}

/// LLM-backed implementation of [`NarrativeBackend`]
pub struct AgentRunner<L: LlmPort, R: RandomPort> {
    llm: L,
    tools: ToolExecutionService<R>,
    max_turns: u32,
    temperature: Option<f32>,
}

impl<L: LlmPort, R: RandomPort> AgentRunner<L, R> {
    pub fn new(llm: L, random: R, config: &AgentConfig) -> Self {
        Self {
            llm,
            tools: ToolExecutionService::new(random),
            max_turns: config.max_turns.max(1),
            temperature: config.temperature,
        }
    }

    fn build_request(&self, stage: Stage, messages: Vec<ChatMessage>) -> LlmRequest {
        LlmRequest::new(messages)
            .with_system_prompt(stage.instructions())
            .with_temperature(self.temperature)
    }

    /// Run every requested tool, failing on anything outside `allowed`
    fn execute_tool_calls(
        &self,
        calls: &[ToolCall],
        allowed: &[GameTool],
    ) -> Result<Vec<ChatMessage>, StageError> {
        calls
            .iter()
            .map(|call| -> Result<ChatMessage, StageError> {
                let tool = GameTool::from_name(&call.name)
                    .filter(|tool| tool.is_allowed(allowed))
                    .ok_or_else(|| StageError::UnknownTool(call.name.clone()))?;
                Ok(ChatMessage::tool_result(
                    &call.id,
                    self.tools.execute_tool(tool),
                ))
            })
            .collect()
    }
}

/// Function definitions for the given capability set
pub fn tool_definitions(tools: &[GameTool]) -> Vec<ToolDefinition> {
    tools
        .iter()
        .map(|tool| ToolDefinition {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        })
        .collect()
}

#[async_trait]
impl<L: LlmPort, R: RandomPort> NarrativeBackend for AgentRunner<L, R> {
    #[instrument(skip_all, fields(stage = %request.stage, agent = request.stage.agent_name()))]
    async fn run_stage(&self, request: StageRequest<'_>) -> Result<String, StageError> {
        let mut messages = vec![ChatMessage::user(request.input)];

        if request.tools.is_empty() {
            let response = self
                .llm
                .generate(self.build_request(request.stage, messages))
                .await?;
            return Ok(response.content);
        }

        let definitions = tool_definitions(request.tools);
        for turn in 1..=self.max_turns {
            let response = self
                .llm
                .generate_with_tools(
                    self.build_request(request.stage, messages.clone()),
                    definitions.clone(),
                )
                .await?;

            if response.tool_calls.is_empty() {
                debug!(
                    turn,
                    finish_reason = ?response.finish_reason,
                    total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
                    "Agent produced final output"
                );
                return Ok(response.content);
            }

            info!(turn, calls = response.tool_calls.len(), "Agent requested tools");
            let results = self.execute_tool_calls(&response.tool_calls, request.tools)?;
            messages.push(ChatMessage::assistant_tool_calls(
                response.content,
                response.tool_calls,
            ));
            messages.extend(results);
        }

        Err(StageError::MaxTurnsExceeded(self.max_turns))
    }
}
