//! Invocation audit record types.

use chrono::{DateTime, Utc};
use dossier_core::{PromptRole, TokenUsage};
use serde::{Deserialize, Serialize};

/// One LLM invocation, as persisted for audit.
///
/// Token counts are the word-count approximation from
/// [`dossier_core::TokenUsage`], not provider accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationRecord {
    /// Identifier of the conversation turn this call belongs to
    pub conversation_turn_id: i32,
    /// Which pipeline stage issued the call
    pub prompt_role: PromptRole,
    /// Model identifier sent to the provider
    pub model: String,
    /// Composite audit tag of model id, token limit, and prompt version
    pub model_key: String,
    /// Prompt messages serialized as a JSON list of `{role, content}`
    pub prompt_messages: serde_json::Value,
    /// Combined system prompt text, webhook context included
    pub system_prompt: String,
    /// The provider's response text
    pub response: String,
    /// UTC instant immediately before the provider call
    pub started_at: DateTime<Utc>,
    /// UTC instant immediately after the provider call
    pub finished_at: DateTime<Utc>,
    /// Word-count token approximation for this call
    pub usage: TokenUsage,
}
