//! Turn execution logic.
//!
//! This module provides the pipeline that processes one conversation turn
//! by calling the LLM up to three times in sequence (initial, critique,
//! refine), auditing every call through the invocation store.

use crate::{CritiqueVerdict, DossierConfig, prompts};
use chrono::Utc;
use dossier_core::{ChatRequest, Message, PromptRole, Role, TokenUsage, TurnRequest};
use dossier_error::{DialogueError, DialogueErrorKind, DossierResult, JsonError};
use dossier_interface::{ChatDriver, ContextWebhook, InvocationRecord, InvocationStore};
use tracing::{debug, instrument};

/// The result of one executed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The initial draft response
    pub unrefined: String,
    /// The critique stage's verdict on the draft
    pub verdict: CritiqueVerdict,
    /// The revised response, present iff the critique reported violations
    pub refined: Option<String>,
}

impl TurnOutcome {
    /// The text to deliver to the caller: the refined response when the
    /// refine stage ran, otherwise the draft.
    pub fn final_response(&self) -> &str {
        self.refined.as_deref().unwrap_or(&self.unrefined)
    }
}

/// Executes conversation turns against an LLM driver.
///
/// Each turn is a strictly sequential generate → critique → refine
/// sequence over a single invoke primitive. Webhook context handles are
/// injected at construction; their payloads are folded into the system
/// prompt before every LLM call. Every call records one audit row, so a
/// turn produces two rows (clean critique) or three (violations found).
///
/// Provider, webhook-transport, and store failures all propagate as fatal;
/// there is no retry anywhere in the pipeline.
pub struct TurnPipeline<D: ChatDriver, S: InvocationStore> {
    driver: D,
    store: S,
    config: DossierConfig,
    webhooks: Vec<Box<dyn ContextWebhook>>,
}

impl<D: ChatDriver, S: InvocationStore> TurnPipeline<D, S> {
    /// Create a new pipeline with no webhook context sources.
    pub fn new(driver: D, store: S, config: DossierConfig) -> Self {
        Self {
            driver,
            store,
            config,
            webhooks: Vec::new(),
        }
    }

    /// Replace the webhook context sources.
    pub fn with_webhooks(mut self, webhooks: Vec<Box<dyn ContextWebhook>>) -> Self {
        self.webhooks = webhooks;
        self
    }

    /// Fetch all webhook payloads and fold them into one context string.
    ///
    /// Sequential, one call per handle. Error-shaped payloads (non-200
    /// statuses) fold in like any other; transport failures abort.
    async fn webhook_context(&self) -> DossierResult<String> {
        let mut fragments = Vec::with_capacity(self.webhooks.len());
        for webhook in &self.webhooks {
            let payload = webhook.fetch().await?;
            fragments.push(format!("{} Webhook Response: {}", webhook.label(), payload));
        }
        Ok(fragments.join(", "))
    }

    /// The single LLM call primitive.
    ///
    /// Appends webhook context to the system prompt, calls the driver with
    /// the pipeline's fixed sampling parameters, and records one audit row
    /// bracketed by UTC timestamps. Token counts are word-count
    /// approximations. Returns the raw response text.
    #[instrument(skip(self, system_prompt, messages), fields(prompt_role = %prompt_role))]
    pub async fn invoke(
        &self,
        turn_id: i32,
        prompt_role: PromptRole,
        system_prompt: &str,
        messages: &[Message],
    ) -> DossierResult<String> {
        let context = self.webhook_context().await?;
        let combined_system_prompt = if context.is_empty() {
            system_prompt.to_string()
        } else {
            format!("{}\n\n{}", system_prompt, context)
        };

        let prompt_messages = serde_json::to_value(messages)
            .map_err(|e| JsonError::new(format!("Failed to serialize prompt messages: {}", e)))?;

        let request = ChatRequest {
            system: Some(combined_system_prompt.clone()),
            messages: messages.to_vec(),
            max_tokens: Some(self.config.max_tokens),
            temperature: Some(1.0),
            top_p: Some(1.0),
        };

        let started_at = Utc::now();
        let response = self.driver.generate(&request).await?;
        let finished_at = Utc::now();

        let usage = TokenUsage::approximate(messages, &response.text);
        debug!(
            input_tokens = *usage.input_tokens(),
            output_tokens = *usage.output_tokens(),
            "Received model response"
        );

        let record = InvocationRecord {
            conversation_turn_id: turn_id,
            prompt_role,
            model: self.driver.model_name().to_string(),
            model_key: self.config.model_key(),
            prompt_messages,
            system_prompt: combined_system_prompt,
            response: response.text.clone(),
            started_at,
            finished_at,
            usage,
        };
        self.store.record(&record).await?;

        Ok(response.text)
    }

    /// Draft the actor's response from its conversation history.
    #[instrument(skip(self, request), fields(actor = %request.actor.name))]
    pub async fn respond_initial(
        &self,
        turn_id: i32,
        request: &TurnRequest,
    ) -> DossierResult<String> {
        self.invoke(
            turn_id,
            PromptRole::Initial,
            &prompts::system_prompt(request),
            &request.actor.messages,
        )
        .await
    }

    /// Check the draft against the actor's narrative principles.
    #[instrument(skip(self, request, unrefined))]
    pub async fn critique(
        &self,
        turn_id: i32,
        request: &TurnRequest,
        unrefined: &str,
    ) -> DossierResult<CritiqueVerdict> {
        let critique_text = self
            .invoke(
                turn_id,
                PromptRole::Critique,
                &prompts::critique_prompt(request, unrefined),
                &[Message::new(Role::User, unrefined)],
            )
            .await?;

        Ok(CritiqueVerdict::parse(&critique_text))
    }

    /// Revise the draft per the critique report, with minimal edits.
    #[instrument(skip(self, request, critique_report, unrefined))]
    pub async fn refine(
        &self,
        turn_id: i32,
        request: &TurnRequest,
        critique_report: &str,
        unrefined: &str,
    ) -> DossierResult<String> {
        self.invoke(
            turn_id,
            PromptRole::Refine,
            &prompts::refiner_prompt(request, critique_report),
            &[Message::new(Role::User, unrefined)],
        )
        .await
    }

    /// Execute one full turn: initial → critique → (conditionally) refine.
    #[instrument(skip(self, request), fields(actor = %request.actor.name))]
    pub async fn execute_turn(
        &self,
        turn_id: i32,
        request: &TurnRequest,
    ) -> DossierResult<TurnOutcome> {
        if request.actor.messages.is_empty() {
            return Err(DialogueError::new(DialogueErrorKind::EmptyHistory(
                request.actor.name.clone(),
            ))
            .into());
        }

        let unrefined = self.respond_initial(turn_id, request).await?;
        let verdict = self.critique(turn_id, request, &unrefined).await?;

        let refined = match verdict.report() {
            None => None,
            Some(report) => Some(self.refine(turn_id, request, report, &unrefined).await?),
        };

        debug!(refined = refined.is_some(), "Turn complete");
        Ok(TurnOutcome {
            unrefined,
            verdict,
            refined,
        })
    }
}
