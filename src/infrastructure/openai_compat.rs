//! LLM client for OpenAI-compatible chat completion APIs
//!
//! Works against Gemini's OpenAI endpoint by default, and against any other
//! server that speaks `/chat/completions` (Ollama, LM Studio, OpenAI).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::application::ports::outbound::{
    FinishReason, LlmError, LlmPort, LlmRequest, LlmResponse, MessageRole, TokenUsage, ToolCall,
    ToolDefinition,
};

/// Client for an OpenAI-compatible API
#[derive(Clone)]
pub struct OpenAiCompatClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiCompatClient {
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn send(&self, api_request: OpenAIChatRequest) -> Result<LlmResponse, LlmError> {
        debug!(
            model = %api_request.model,
            messages = api_request.messages.len(),
            tools = api_request.tools.as_ref().map_or(0, Vec::len),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(request_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.map_err(request_error)?;
            return Err(LlmError::RequestFailed(format!("{}: {}", status, error_text)));
        }

        let api_response: OpenAIChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        convert_response(api_response)
    }
}

#[async_trait]
impl LlmPort for OpenAiCompatClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_request = OpenAIChatRequest {
            model: self.model.clone(),
            messages: build_messages(&request),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            tools: None,
        };

        self.send(api_request).await
    }

    async fn generate_with_tools(
        &self,
        request: LlmRequest,
        tools: Vec<ToolDefinition>,
    ) -> Result<LlmResponse, LlmError> {
        let api_tools: Vec<OpenAITool> = tools
            .into_iter()
            .map(|t| OpenAITool {
                r#type: "function".to_string(),
                function: OpenAIFunction {
                    name: t.name,
                    description: t.description,
                    parameters: t.parameters,
                },
            })
            .collect();

        let api_request = OpenAIChatRequest {
            model: self.model.clone(),
            messages: build_messages(&request),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            tools: Some(api_tools),
        };

        self.send(api_request).await
    }
}

fn request_error(e: reqwest::Error) -> LlmError {
    if e.is_timeout() {
        LlmError::Timeout
    } else {
        LlmError::RequestFailed(e.to_string())
    }
}

fn build_messages(request: &LlmRequest) -> Vec<OpenAIMessage> {
    let mut messages = Vec::new();

    if let Some(system) = &request.system_prompt {
        messages.push(OpenAIMessage {
            role: "system".to_string(),
            content: Some(system.clone()),
            ..Default::default()
        });
    }

    for msg in &request.messages {
        let tool_calls = (!msg.tool_calls.is_empty()).then(|| {
            msg.tool_calls
                .iter()
                .map(|tc| OpenAIToolCall {
                    id: tc.id.clone(),
                    r#type: "function".to_string(),
                    function: OpenAIToolCallFunction {
                        name: tc.name.clone(),
                        arguments: tc.arguments.to_string(),
                    },
                })
                .collect()
        });

        messages.push(OpenAIMessage {
            role: match msg.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
                MessageRole::Tool => "tool",
            }
            .to_string(),
            content: Some(msg.content.clone()),
            tool_calls,
            tool_call_id: msg.tool_call_id.clone(),
        });
    }

    messages
}

fn convert_response(response: OpenAIChatResponse) -> Result<LlmResponse, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No choices in LLM response".to_string()))?;

    let mut tool_calls = Vec::new();
    for tc in choice.message.tool_calls.unwrap_or_default() {
        // Zero-argument tools may come back with an empty argument string
        let arguments: serde_json::Value = if tc.function.arguments.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&tc.function.arguments).map_err(|e| {
                LlmError::InvalidResponse(format!(
                    "Invalid tool call arguments for '{}': {}",
                    tc.function.name, e
                ))
            })?
        };
        tool_calls.push(ToolCall {
            id: tc.id,
            name: tc.function.name,
            arguments,
        });
    }

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("stop") => FinishReason::Stop,
        Some("length") => FinishReason::Length,
        Some("tool_calls") => FinishReason::ToolCalls,
        Some("content_filter") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    };

    Ok(LlmResponse {
        content: choice.message.content.unwrap_or_default(),
        tool_calls,
        finish_reason,
        usage: response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }),
    })
}

// =============================================================================
// OpenAI API types
// =============================================================================

#[derive(Debug, Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<OpenAITool>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<OpenAIToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct OpenAITool {
    r#type: String,
    function: OpenAIFunction,
}

#[derive(Debug, Serialize)]
struct OpenAIFunction {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize, Default)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAIToolCall {
    id: String,
    #[serde(default = "function_type")]
    r#type: String,
    function: OpenAIToolCallFunction,
}

fn function_type() -> String {
    "function".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAIToolCallFunction {
    name: String,
    #[serde(default)]
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::ChatMessage;

    fn parse(body: serde_json::Value) -> Result<LlmResponse, LlmError> {
        convert_response(serde_json::from_value(body).unwrap())
    }

    #[test]
    fn test_convert_text_response() {
        let response = parse(serde_json::json!({
            "choices": [{
                "message": {"role": "assistant", "content": "You receive a shiny amulet."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 6, "total_tokens": 18}
        }))
        .unwrap();

        assert_eq!(response.content, "You receive a shiny amulet.");
        assert!(response.tool_calls.is_empty());
        assert_eq!(response.finish_reason, FinishReason::Stop);
        assert_eq!(response.usage.map(|u| u.total_tokens), Some(18));
    }

    #[test]
    fn test_convert_tool_call_response() {
        let response = parse(serde_json::json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [
                        {"id": "call_1", "type": "function",
                         "function": {"name": "roll_dice", "arguments": "{}"}},
                        {"id": "call_2", "type": "function",
                         "function": {"name": "generate_event", "arguments": ""}}
                    ]
                },
                "finish_reason": "tool_calls"
            }]
        }))
        .unwrap();

        assert_eq!(response.content, "");
        assert_eq!(response.finish_reason, FinishReason::ToolCalls);
        assert_eq!(response.tool_calls.len(), 2);
        assert_eq!(response.tool_calls[0].name, "roll_dice");
        assert_eq!(response.tool_calls[1].id, "call_2");
        assert_eq!(response.tool_calls[1].arguments, serde_json::json!({}));
    }

    #[test]
    fn test_convert_rejects_empty_choices() {
        let err = parse(serde_json::json!({"choices": []})).unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }

    #[test]
    fn test_convert_rejects_bad_arguments() {
        let err = parse(serde_json::json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "tool_calls": [{"id": "call_1",
                        "function": {"name": "roll_dice", "arguments": "{not json"}}]
                }
            }]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("roll_dice"));
    }

    #[test]
    fn test_build_messages_with_tool_round_trip() {
        let request = LlmRequest::new(vec![
            ChatMessage::user("Start encounter"),
            ChatMessage::assistant_tool_calls(
                "",
                vec![ToolCall {
                    id: "call_1".to_string(),
                    name: "roll_dice".to_string(),
                    arguments: serde_json::json!({}),
                }],
            ),
            ChatMessage::tool_result("call_1", "🎲 You rolled a 4!"),
        ])
        .with_system_prompt("You handle monster encounters using roll_dice and generate_event.");

        let messages = serde_json::to_value(build_messages(&request)).unwrap();

        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "Start encounter");
        assert!(messages[1].get("tool_calls").is_none());
        assert_eq!(messages[2]["tool_calls"][0]["id"], "call_1");
        assert_eq!(messages[2]["tool_calls"][0]["type"], "function");
        assert_eq!(messages[2]["tool_calls"][0]["function"]["arguments"], "{}");
        assert_eq!(messages[3]["role"], "tool");
        assert_eq!(messages[3]["tool_call_id"], "call_1");
        assert_eq!(messages[3]["content"], "🎲 You rolled a 4!");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = OpenAiCompatClient::new("http://localhost:11434/v1/", "llama3.2", "key", 5);
        assert_eq!(client.base_url, "http://localhost:11434/v1");
    }
}
