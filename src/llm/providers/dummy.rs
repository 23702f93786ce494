//! Dummy LLM provider — echoes input back prefixed with `[echo]`.
//! Used for testing the full assistant round-trip without a real API key.
//! Never requests a tool.

use crate::llm::{LlmReply, ProviderError};

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn complete(&self, _system: &str, user: &str) -> Result<LlmReply, ProviderError> {
        Ok(LlmReply::Text(format!("[echo] {user}")))
    }

    pub async fn complete_with_tool_output(&self, tool_output: &str) -> Result<String, ProviderError> {
        Ok(format!("[echo-tool] {tool_output}"))
    }
}
