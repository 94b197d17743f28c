//! Actor types for the interrogation game.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A story character the LLM impersonates during an interrogation.
///
/// The actor owns its conversation history for the duration of a
/// conversation; messages are append-only.
///
/// # Examples
///
/// ```
/// use dossier_core::{Actor, Message, Role};
///
/// let mut actor = Actor::builder()
///     .name("Marla Vane")
///     .context("Worked the night shift at the data center.")
///     .secret("She saw the intruder's badge number.")
///     .build()
///     .unwrap();
///
/// actor.push_message(Message::new(Role::User, "Where were you that night?"));
/// assert_eq!(actor.messages.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct Actor {
    /// The character's name
    pub name: String,
    /// Free-text backstory establishing the character
    pub context: String,
    /// Information the character reveals selectively
    pub secret: String,
    /// Free-text personality description used during refinement
    pub personality: String,
    /// Narrative-principle description the critique step checks against
    pub violation: String,
    /// Ordered conversation history, append-only
    pub messages: Vec<Message>,
}

impl Actor {
    /// Create a builder for constructing an actor.
    pub fn builder() -> ActorBuilder {
        ActorBuilder::default()
    }

    /// Append a message to the conversation history.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The most recent message in the conversation, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
