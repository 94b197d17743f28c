//! Wire DTOs for the Groq chat-completions endpoint.

use serde::{Deserialize, Serialize};

/// A `{role, content}` message in the OpenAI-compatible wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroqWireMessage {
    /// Lowercase role name ("system", "user", "assistant")
    pub role: String,
    /// Text content
    pub content: String,
}

/// Request body for `POST /openai/v1/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroqChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages, system prompt first when present
    pub messages: Vec<GroqWireMessage>,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Nucleus sampling parameter
    pub top_p: f32,
    /// Streaming is never requested
    pub stream: bool,
    /// No stop sequences
    pub stop: Option<Vec<String>>,
}

/// One completion choice in the response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroqChoice {
    /// The generated message
    pub message: GroqWireMessage,
}

/// Response body from the chat-completions endpoint.
///
/// The provider also returns its own usage accounting; the pipeline ignores
/// it in favor of locally recomputed word counts, so it is not modeled here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroqChatResponse {
    /// Completion choices; the pipeline reads the first
    pub choices: Vec<GroqChoice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_openai_shape() {
        let request = GroqChatRequest {
            model: "llama3-8b-8192".to_string(),
            messages: vec![GroqWireMessage {
                role: "user".to_string(),
                content: "Hi".to_string(),
            }],
            temperature: 1.0,
            max_tokens: 1000,
            top_p: 1.0,
            stream: false,
            stop: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3-8b-8192");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Hi");
        assert_eq!(json["temperature"], 1.0);
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["top_p"], 1.0);
        assert_eq!(json["stream"], false);
        assert!(json["stop"].is_null());
    }

    #[test]
    fn test_response_parses_choices() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Hello."}}],
            "usage": {"prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7}
        }"#;

        let response: GroqChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content, "Hello.");
    }
}
