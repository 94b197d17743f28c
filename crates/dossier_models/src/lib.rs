//! LLM provider integrations for the dossier dialogue pipeline.
//!
//! The pipeline speaks to exactly one provider: Groq's OpenAI-compatible
//! chat-completions endpoint, wrapped in [`GroqClient`].
//!
//! # Example
//!
//! ```no_run
//! use dossier_models::GroqClient;
//! use dossier_interface::ChatDriver;
//! use dossier_core::{ChatRequest, Message, Role};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GroqClient::new("gsk_...", "llama3-8b-8192");
//! let request = ChatRequest::builder()
//!     .messages(vec![Message::new(Role::User, "Hello")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod groq;

pub use groq::GroqClient;
