//! Diesel models for the ai_invocations audit table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use dossier_interface::InvocationRecord;

/// Database row for the ai_invocations table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::ai_invocations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AiInvocationRow {
    /// Auto-generated identifier
    pub id: i32,
    /// Conversation turn this call belongs to
    pub conversation_turn_id: i32,
    /// Pipeline stage tag ("initial", "critique", "refine")
    pub prompt_role: String,
    /// Model identifier sent to the provider
    pub model: String,
    /// Composite audit tag of model id, token limit, and prompt version
    pub model_key: String,
    /// Serialized prompt messages
    pub prompt_messages: serde_json::Value,
    /// Combined system prompt text
    pub system_prompt: String,
    /// Provider response text
    pub response: String,
    /// UTC instant before the provider call
    pub started_at: DateTime<Utc>,
    /// UTC instant after the provider call
    pub finished_at: DateTime<Utc>,
    /// Approximate input token count (word count)
    pub input_tokens: i32,
    /// Approximate output token count (word count)
    pub output_tokens: i32,
    /// Input + output
    pub total_tokens: i32,
}

/// Insertable struct for the ai_invocations table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::ai_invocations)]
pub struct NewAiInvocationRow {
    /// Conversation turn this call belongs to
    pub conversation_turn_id: i32,
    /// Pipeline stage tag
    pub prompt_role: String,
    /// Model identifier sent to the provider
    pub model: String,
    /// Composite audit tag
    pub model_key: String,
    /// Serialized prompt messages
    pub prompt_messages: serde_json::Value,
    /// Combined system prompt text
    pub system_prompt: String,
    /// Provider response text
    pub response: String,
    /// UTC instant before the provider call
    pub started_at: DateTime<Utc>,
    /// UTC instant after the provider call
    pub finished_at: DateTime<Utc>,
    /// Approximate input token count
    pub input_tokens: i32,
    /// Approximate output token count
    pub output_tokens: i32,
    /// Input + output
    pub total_tokens: i32,
}

impl From<&InvocationRecord> for NewAiInvocationRow {
    fn from(record: &InvocationRecord) -> Self {
        Self {
            conversation_turn_id: record.conversation_turn_id,
            prompt_role: record.prompt_role.to_string(),
            model: record.model.clone(),
            model_key: record.model_key.clone(),
            prompt_messages: record.prompt_messages.clone(),
            system_prompt: record.system_prompt.clone(),
            response: record.response.clone(),
            started_at: record.started_at,
            finished_at: record.finished_at,
            input_tokens: *record.usage.input_tokens() as i32,
            output_tokens: *record.usage.output_tokens() as i32,
            total_tokens: *record.usage.total_tokens() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::{PromptRole, TokenUsage};

    #[test]
    fn test_new_row_from_record() {
        let record = InvocationRecord {
            conversation_turn_id: 7,
            prompt_role: PromptRole::Critique,
            model: "llama3-8b-8192".to_string(),
            model_key: "llama3-8b-8192:1000:1.0.5".to_string(),
            prompt_messages: serde_json::json!([{"role": "user", "content": "Hi"}]),
            system_prompt: "background".to_string(),
            response: "NONE!".to_string(),
            started_at: Utc::now(),
            finished_at: Utc::now(),
            usage: TokenUsage::new(3, 1),
        };

        let row = NewAiInvocationRow::from(&record);
        assert_eq!(row.conversation_turn_id, 7);
        assert_eq!(row.prompt_role, "critique");
        assert_eq!(row.input_tokens, 3);
        assert_eq!(row.output_tokens, 1);
        assert_eq!(row.total_tokens, 4);
    }
}
