//! Trait definitions for the dossier dialogue pipeline.
//!
//! This crate provides the seams between the pipeline and its
//! collaborators: the LLM provider, the injected webhook context sources,
//! and the invocation audit store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod record;
mod traits;

pub use record::InvocationRecord;
pub use traits::{ChatDriver, ContextWebhook, InvocationStore};
