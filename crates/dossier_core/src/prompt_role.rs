//! Prompt role tags for audit records.

use serde::{Deserialize, Serialize};

/// Which stage of the turn pipeline produced an LLM invocation.
///
/// Stored in the `prompt_role` audit column as the lowercase stage name.
///
/// # Examples
///
/// ```
/// use dossier_core::PromptRole;
///
/// assert_eq!(PromptRole::Initial.to_string(), "initial");
/// assert_eq!(PromptRole::Critique.to_string(), "critique");
/// assert_eq!(PromptRole::Refine.to_string(), "refine");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    /// The first draft of the actor's response
    #[display("initial")]
    Initial,
    /// The principle-violation check on the draft
    #[display("critique")]
    Critique,
    /// The conditional minimal-edit revision of the draft
    #[display("refine")]
    Refine,
}
