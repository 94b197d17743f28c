//! Core data types for the dossier dialogue pipeline.
//!
//! This crate provides the foundation data types used across all dossier
//! interfaces: conversation messages, interrogation-game actors, turn
//! requests, and the word-count token approximation used for auditing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod actor;
mod chat;
mod message;
mod prompt_role;
mod request;
mod role;
mod token_counting;

pub use actor::{Actor, ActorBuilder, ActorBuilderError};
pub use chat::{ChatRequest, ChatRequestBuilder, ChatResponse};
pub use message::Message;
pub use prompt_role::PromptRole;
pub use request::TurnRequest;
pub use role::Role;
pub use token_counting::{TokenUsage, count_message_words, count_words};
