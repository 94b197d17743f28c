//! Trait definitions for LLM providers, webhook context, and audit storage.

use crate::InvocationRecord;
use async_trait::async_trait;
use dossier_core::{ChatRequest, ChatResponse};
use dossier_error::DossierResult;

/// Core trait that all LLM chat-completion providers must implement.
///
/// One request, one text response. No streaming, no tool use; the pipeline
/// makes strictly sequential calls and treats provider failures as fatal.
#[async_trait]
pub trait ChatDriver: Send + Sync {
    /// Generate a chat completion for the given request.
    async fn generate(&self, req: &ChatRequest) -> DossierResult<ChatResponse>;

    /// Provider name (e.g., "groq").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama3-8b-8192").
    fn model_name(&self) -> &str;
}

/// An injected external-context capability.
///
/// Implementations call an automation service and return its JSON payload,
/// which the pipeline folds into the system prompt before each LLM call.
/// A non-success HTTP status is captured as an error-shaped JSON value, not
/// an `Err`; transport failures propagate as fatal.
#[async_trait]
pub trait ContextWebhook: Send + Sync {
    /// Human-readable label used when folding the payload into the prompt.
    fn label(&self) -> &str;

    /// Fetch the context payload.
    async fn fetch(&self) -> DossierResult<serde_json::Value>;
}

/// Persistence seam for per-invocation audit records.
///
/// Implementations insert exactly one row per call and never update or
/// delete; commit/rollback belongs to the owner of the underlying
/// connection.
#[async_trait]
pub trait InvocationStore: Send + Sync {
    /// Persist one invocation audit record.
    async fn record(&self, record: &InvocationRecord) -> DossierResult<()>;
}
