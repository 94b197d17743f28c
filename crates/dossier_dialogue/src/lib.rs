//! Generate/critique/refine turn pipeline for the interrogation game.
//!
//! Each conversation turn runs a linear three-stage sequence over a single
//! LLM call primitive:
//!
//! 1. **initial** — draft an in-character response from the actor's
//!    conversation history;
//! 2. **critique** — check the draft against the actor's narrative
//!    principles with a second LLM call;
//! 3. **refine** — iff the critique reports violations, revise the draft
//!    with a third call.
//!
//! Every call is persisted through an [`dossier_interface::InvocationStore`]
//! (two or three audit rows per turn), and registered
//! [`dossier_interface::ContextWebhook`] handles inject external automation
//! context into the system prompt before each call.
//!
//! # Example
//!
//! ```rust,ignore
//! use dossier_core::{Actor, Message, Role, TurnRequest};
//! use dossier_database::{establish_connection, PostgresInvocationStore};
//! use dossier_dialogue::{DossierConfig, TurnPipeline, standard_webhooks};
//! use dossier_models::GroqClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DossierConfig::from_env()?;
//! let driver = GroqClient::new(&config.groq_api_key, &config.model);
//! let store = PostgresInvocationStore::new(establish_connection(&config.database_url)?);
//!
//! let pipeline = TurnPipeline::new(driver, store, config)
//!     .with_webhooks(standard_webhooks("http://127.0.0.1:8000"));
//!
//! let mut actor = Actor::builder()
//!     .name("Marla Vane")
//!     .context("Worked the night shift at the data center.")
//!     .secret("She saw the intruder's badge number.")
//!     .build()?;
//! actor.push_message(Message::new(Role::User, "Where were you that night?"));
//!
//! let request = TurnRequest::new("A storm knocked out the cameras.", actor);
//! let outcome = pipeline.execute_turn(1, &request).await?;
//! println!("{}", outcome.final_response());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod critique;
mod executor;
pub mod prompts;
mod store;
mod telemetry;
mod webhook;

pub use config::{DossierConfig, DossierConfigBuilder, DossierConfigBuilderError};
pub use critique::CritiqueVerdict;
pub use executor::{TurnOutcome, TurnPipeline};
pub use store::InMemoryInvocationStore;
pub use telemetry::init_tracing;
pub use webhook::{AutomationWebhook, standard_webhooks};
