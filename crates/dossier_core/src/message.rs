//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A text message in a conversation, immutable once created.
///
/// Serializes to the provider-neutral `{role, content}` form used both on
/// the wire and in the `prompt_messages` audit column.
///
/// # Examples
///
/// ```
/// use dossier_core::{Message, Role};
///
/// let message = Message::new(Role::User, "Hello!");
///
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content, "Hello!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Create a new message.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
