//! Bereavement assistant — free-text Q&A with an optional web-search
//! tool detour.
//!
//! One completion call offers the `web_search` tool; if the model asks
//! for it, the search runs and a second completion call produces the
//! final answer. Every failure path degrades to a canned reply — asking
//! the assistant never returns an error.

pub mod search;

use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::AppError;
use crate::llm::{LlmProvider, LlmReply, ToolCall, ToolSpec, providers};
use search::SearchClient;

/// Canned reply for any provider/transport failure.
const CONNECTION_TROUBLE: &str =
    "I'm encountering connection issues. Please check your API keys.";
/// Canned reply when the model produced no text.
const EMPTY_RESPONSE: &str = "I couldn't generate a response.";

/// Compiled-in system prompt, used when the prompt file is missing.
const FALLBACK_SYSTEM_PROMPT: &str = "You are a helpful assistant for Singapore post-death \
administration. Prioritize your internal knowledge for general concepts. Use the 'web_search' \
tool only for current fees, rates, statistics, recent events, or specific addresses and contact \
details. Cite sources provided in tool output.";

/// Path of the editable system prompt, relative to the working directory.
pub const SYSTEM_PROMPT_PATH: &str = "config/prompts/assistant_system.txt";

/// Who said a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Agent,
}

/// One line of the conversation, as the UI renders it.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    /// Name of the tool that contributed to this reply, if any.
    pub tool_used: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::User,
            content: content.into(),
            tool_used: None,
            timestamp: Utc::now(),
        }
    }

    pub fn agent(content: impl Into<String>, tool_used: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::Agent,
            content: content.into(),
            tool_used,
            timestamp: Utc::now(),
        }
    }
}

/// Assistant's answer: the response text and the tool that produced it,
/// when one was used.
#[derive(Debug, Clone)]
pub struct AgentReply {
    pub response: String,
    pub tool: Option<String>,
}

pub struct Assistant {
    provider: LlmProvider,
    search: SearchClient,
    system_prompt: String,
}

impl Assistant {
    /// Build the assistant from config. The system prompt is read from
    /// [`SYSTEM_PROMPT_PATH`] with a compiled-in fallback.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let provider = providers::build(&config.llm, config.llm_api_key.clone())
            .map_err(|e| AppError::Llm(e.to_string()))?;
        let search = SearchClient::new(config)?;
        let system_prompt = std::fs::read_to_string(SYSTEM_PROMPT_PATH).unwrap_or_else(|_| {
            warn!(path = SYSTEM_PROMPT_PATH, "prompt file missing, using built-in prompt");
            FALLBACK_SYSTEM_PROMPT.to_string()
        });
        Ok(Self { provider, search, system_prompt })
    }

    /// Answer a free-text query, possibly taking one web-search detour.
    pub async fn ask(&self, query: &str) -> AgentReply {
        let tools = [web_search_spec()];

        let first = match self.provider.complete(&self.system_prompt, query, &tools).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("assistant completion failed: {e}");
                return AgentReply { response: CONNECTION_TROUBLE.to_string(), tool: None };
            }
        };

        match first {
            LlmReply::Text(text) if text.is_empty() => {
                AgentReply { response: EMPTY_RESPONSE.to_string(), tool: None }
            }
            LlmReply::Text(text) => AgentReply { response: text, tool: None },
            LlmReply::ToolRequest(call) if call.name == "web_search" => {
                self.run_search_detour(query, call).await
            }
            LlmReply::ToolRequest(call) => {
                warn!(tool = %call.name, "model requested an unknown tool");
                AgentReply { response: EMPTY_RESPONSE.to_string(), tool: None }
            }
        }
    }

    async fn run_search_detour(&self, query: &str, call: ToolCall) -> AgentReply {
        let search_query = parse_search_query(&call.arguments).unwrap_or_else(|| query.to_string());
        info!(%search_query, "assistant taking web-search detour");

        let results = self.search.search(&search_query).await;

        match self
            .provider
            .complete_with_tool_output(&self.system_prompt, query, &call, &results)
            .await
        {
            Ok(text) if text.is_empty() => AgentReply {
                response: EMPTY_RESPONSE.to_string(),
                tool: Some("web_search".to_string()),
            },
            Ok(text) => AgentReply { response: text, tool: Some("web_search".to_string()) },
            Err(e) => {
                error!("assistant follow-up completion failed: {e}");
                AgentReply { response: CONNECTION_TROUBLE.to_string(), tool: None }
            }
        }
    }
}

/// The single tool the assistant offers the model.
fn web_search_spec() -> ToolSpec {
    ToolSpec {
        name: "web_search".to_string(),
        description: "Search the internet for current information. Use this for specific facts, \
            recent news, government policy updates, or when your internal knowledge is \
            insufficient."
            .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query optimized for a search engine \
                        (e.g. 'Singapore probate application fees 2025')"
                }
            },
            "required": ["query"]
        }),
    }
}

/// Pull the `query` field out of the model's raw argument JSON.
fn parse_search_query(arguments: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(arguments)
        .ok()?
        .get("query")?
        .as_str()
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_argument() {
        assert_eq!(
            parse_search_query(r#"{"query": "probate fees 2025"}"#),
            Some("probate fees 2025".to_string())
        );
    }

    #[test]
    fn malformed_arguments_yield_none() {
        assert_eq!(parse_search_query("not json"), None);
        assert_eq!(parse_search_query(r#"{"q": "wrong field"}"#), None);
        assert_eq!(parse_search_query(r#"{"query": 42}"#), None);
    }

    #[test]
    fn tool_spec_is_valid_schema() {
        let spec = web_search_spec();
        assert_eq!(spec.name, "web_search");
        assert_eq!(spec.parameters["required"][0], "query");
    }

    #[test]
    fn chat_messages_carry_identity() {
        let user = ChatMessage::user("hello");
        let agent = ChatMessage::agent("hi", Some("web_search".into()));
        assert_ne!(user.id, agent.id);
        assert_eq!(user.role, MessageRole::User);
        assert_eq!(agent.tool_used.as_deref(), Some("web_search"));
    }

    #[tokio::test]
    async fn dummy_provider_answers_without_tools() {
        let assistant = Assistant::new(&Config::test_default()).unwrap();
        let reply = assistant.ask("what is probate?").await;
        assert!(reply.response.contains("what is probate?"));
        assert_eq!(reply.tool, None);
    }

    #[tokio::test]
    async fn openai_transport_failure_masks_as_canned_reply() {
        let mut cfg = Config::test_default();
        cfg.llm.provider = "openai".into();
        // unreachable endpoint — the error must be swallowed
        let assistant = Assistant::new(&cfg).unwrap();
        let reply = assistant.ask("what is probate?").await;
        assert_eq!(reply.response, CONNECTION_TROUBLE);
        assert_eq!(reply.tool, None);
    }
}
