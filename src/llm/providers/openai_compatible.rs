//! OpenAI-compatible chat completion provider (`/v1/chat/completions`).
//!
//! Exposes the two round-trips the assistant needs: a first completion
//! with tools offered, and a follow-up completion carrying a tool call
//! and its output. All OpenAI wire types are private to this module —
//! callers never see them.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::llm::{LlmReply, ProviderError, ToolCall, ToolSpec};

// ── Public provider ───────────────────────────────────────────────────────────

/// Adapter for any HTTP endpoint implementing `/v1/chat/completions`.
///
/// Covers OpenAI, OpenAI-compatible local servers (Ollama, LM Studio…),
/// and hosted alternatives. Constructed once at startup, then cheaply
/// cloned because `reqwest::Client` is an `Arc` internally.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleProvider {
    client: Client,
    api_base_url: String,
    model: String,
    temperature: f32,
    api_key: Option<String>,
}

impl OpenAiCompatibleProvider {
    /// Build a provider from config values and an optional API key.
    ///
    /// When present the key is sent as `Authorization: Bearer <key>` on
    /// every request.
    pub fn new(
        api_base_url: String,
        model: String,
        temperature: f32,
        timeout_seconds: u64,
        api_key: Option<String>,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| ProviderError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, api_base_url, model, temperature, api_key })
    }

    /// First round-trip: `user` under `system`, with `tools` offered.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        tools: &[ToolSpec],
    ) -> Result<LlmReply, ProviderError> {
        let messages = vec![Message::system(system), Message::user(user)];
        let message = self.request(messages, tools).await?;

        if let Some(call) = message.tool_calls.and_then(|mut calls| {
            if calls.is_empty() { None } else { Some(calls.remove(0)) }
        }) {
            return Ok(LlmReply::ToolRequest(ToolCall {
                id: call.id,
                name: call.function.name,
                arguments: call.function.arguments,
            }));
        }

        Ok(LlmReply::Text(message.content.unwrap_or_default()))
    }

    /// Second round-trip: replay the conversation with the assistant's
    /// tool call and the tool's output appended. No tools offered.
    pub async fn complete_with_tool_output(
        &self,
        system: &str,
        user: &str,
        call: &ToolCall,
        tool_output: &str,
    ) -> Result<String, ProviderError> {
        let messages = vec![
            Message::system(system),
            Message::user(user),
            Message::assistant_tool_call(call),
            Message::tool_result(&call.id, tool_output),
        ];
        let message = self.request(messages, &[]).await?;
        Ok(message.content.unwrap_or_default())
    }

    async fn request(
        &self,
        messages: Vec<Message>,
        tools: &[ToolSpec],
    ) -> Result<ResponseMessage, ProviderError> {
        let payload = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: self.temperature,
            tools: if tools.is_empty() {
                None
            } else {
                Some(tools.iter().map(ToolDef::from).collect())
            },
            tool_choice: if tools.is_empty() { None } else { Some("auto".to_string()) },
        };

        debug!(model = %payload.model, tools = tools.len(), "sending LLM request");
        if tracing::enabled!(tracing::Level::TRACE) {
            let json = serde_json::to_string_pretty(&payload)
                .unwrap_or_else(|e| format!("<serialization failed: {e}>"));
            trace!(payload = %json, "full LLM request payload");
        }

        let mut req = self.client.post(&self.api_base_url).json(&payload);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let response = req
            .send()
            .await
            .map_err(|e| ProviderError::Request(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Request(format!("HTTP {status}: {body}")));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Response(format!("invalid JSON: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or_else(|| ProviderError::Response("no choices in response".to_string()))
    }
}

// ── Wire types (private) ──────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<ToolDef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<String>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<WireToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl Message {
    fn system(content: &str) -> Self {
        Self {
            role: "system".into(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    fn user(content: &str) -> Self {
        Self {
            role: "user".into(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    fn assistant_tool_call(call: &ToolCall) -> Self {
        Self {
            role: "assistant".into(),
            content: None,
            tool_calls: Some(vec![WireToolCall {
                id: call.id.clone(),
                kind: "function".into(),
                function: WireFunctionCall {
                    name: call.name.clone(),
                    arguments: call.arguments.clone(),
                },
            }]),
            tool_call_id: None,
        }
    }

    fn tool_result(call_id: &str, content: &str) -> Self {
        Self {
            role: "tool".into(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(call_id.into()),
        }
    }
}

#[derive(Serialize)]
struct ToolDef {
    #[serde(rename = "type")]
    kind: String,
    function: ToolFunctionDef,
}

#[derive(Serialize)]
struct ToolFunctionDef {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

impl From<&ToolSpec> for ToolDef {
    fn from(spec: &ToolSpec) -> Self {
        Self {
            kind: "function".into(),
            function: ToolFunctionDef {
                name: spec.name.clone(),
                description: spec.description.clone(),
                parameters: spec.parameters.clone(),
            },
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    function: WireFunctionCall,
}

#[derive(Serialize, Deserialize)]
struct WireFunctionCall {
    name: String,
    arguments: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<WireToolCall>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_request_parses_from_wire_json() {
        let raw = r#"{
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {"name": "web_search", "arguments": "{\"query\":\"probate fees\"}"}
                    }]
                }
            }]
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        let msg = parsed.choices.into_iter().next().unwrap().message;
        let calls = msg.tool_calls.unwrap();
        assert_eq!(calls[0].function.name, "web_search");
        assert!(calls[0].function.arguments.contains("probate fees"));
    }

    #[test]
    fn text_reply_parses_from_wire_json() {
        let raw = r#"{"choices": [{"message": {"content": "hello"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        let msg = parsed.choices.into_iter().next().unwrap().message;
        assert_eq!(msg.content.as_deref(), Some("hello"));
        assert!(msg.tool_calls.is_none());
    }

    #[test]
    fn request_serializes_tool_defs() {
        let spec = ToolSpec {
            name: "web_search".into(),
            description: "search".into(),
            parameters: serde_json::json!({"type": "object"}),
        };
        let req = ChatCompletionRequest {
            model: "m".into(),
            messages: vec![Message::user("q")],
            temperature: 0.2,
            tools: Some(vec![ToolDef::from(&spec)]),
            tool_choice: Some("auto".into()),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""type":"function""#));
        assert!(json.contains(r#""tool_choice":"auto""#));
    }

    #[test]
    fn plain_request_omits_tool_fields() {
        let req = ChatCompletionRequest {
            model: "m".into(),
            messages: vec![Message::user("q")],
            temperature: 0.2,
            tools: None,
            tool_choice: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("tools"));
        assert!(!json.contains("tool_choice"));
    }
}
