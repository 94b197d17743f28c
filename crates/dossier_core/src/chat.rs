//! Request and response types for LLM chat completion.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A provider-neutral chat-completion request.
///
/// # Examples
///
/// ```
/// use dossier_core::{ChatRequest, Message, Role};
///
/// let request = ChatRequest::builder()
///     .system("You are a suspect under interrogation.".to_string())
///     .messages(vec![Message::new(Role::User, "Hello!")])
///     .max_tokens(1000u32)
///     .temperature(1.0f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(1000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(default)]
pub struct ChatRequest {
    /// System prompt sent alongside the conversation
    #[builder(setter(strip_option))]
    pub system: Option<String>,
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(setter(strip_option))]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(setter(strip_option))]
    pub temperature: Option<f32>,
    /// Nucleus sampling parameter
    #[builder(setter(strip_option))]
    pub top_p: Option<f32>,
}

impl ChatRequest {
    /// Create a builder for constructing a chat request.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// The unified chat-completion response.
///
/// # Examples
///
/// ```
/// use dossier_core::ChatResponse;
///
/// let response = ChatResponse::new("I was home all night.");
/// assert_eq!(response.text, "I was home all night.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated text from the model
    pub text: String,
}

impl ChatResponse {
    /// Create a new response from generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
