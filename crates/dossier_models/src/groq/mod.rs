//! Groq AI LPU Inference API integration (OpenAI-compatible wire format).

mod client;
mod wire;

pub use client::GroqClient;
pub(crate) use wire::{GroqChatRequest, GroqChatResponse, GroqWireMessage};
