//! LLM provider abstraction.
//!
//! `LlmProvider` is an enum over concrete provider implementations.
//! Add a new variant + module in `providers/` for each additional backend.
//!
//! Provider instances are shared immutable capabilities — clone them freely.
//! Enum dispatch avoids `dyn` trait objects and the `async-trait`
//! dependency. Tool-call *handling* (running the tool, feeding the result
//! back) belongs to the assistant layer; providers only surface the
//! model's request.

pub mod providers;

use serde::Serialize;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("provider request failed: {0}")]
    Request(String),
    #[error("malformed provider response: {0}")]
    Response(String),
}

// ── Tool surface ──────────────────────────────────────────────────────────────

/// A function tool offered to the model alongside a completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    /// JSON Schema for the tool's arguments.
    pub parameters: serde_json::Value,
}

/// A tool invocation the model asked for instead of answering directly.
#[derive(Debug, Clone)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    /// Raw JSON argument string, exactly as the model produced it.
    pub arguments: String,
}

/// What a completion round-trip resolved to.
#[derive(Debug, Clone)]
pub enum LlmReply {
    Text(String),
    ToolRequest(ToolCall),
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    Dummy(providers::dummy::DummyProvider),
    OpenAiCompatible(providers::openai_compatible::OpenAiCompatibleProvider),
}

impl LlmProvider {
    /// One completion round-trip: `user` under `system`, with `tools`
    /// offered for the model to call.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        tools: &[ToolSpec],
    ) -> Result<LlmReply, ProviderError> {
        match self {
            LlmProvider::Dummy(p) => p.complete(system, user).await,
            LlmProvider::OpenAiCompatible(p) => p.complete(system, user, tools).await,
        }
    }

    /// Second round-trip after a tool ran: same conversation plus the
    /// tool call and its output. No tools are offered — the model must
    /// answer in text.
    pub async fn complete_with_tool_output(
        &self,
        system: &str,
        user: &str,
        call: &ToolCall,
        tool_output: &str,
    ) -> Result<String, ProviderError> {
        match self {
            LlmProvider::Dummy(p) => p.complete_with_tool_output(tool_output).await,
            LlmProvider::OpenAiCompatible(p) => {
                p.complete_with_tool_output(system, user, call, tool_output).await
            }
        }
    }
}
