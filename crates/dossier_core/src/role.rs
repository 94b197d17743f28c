//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// The sender of a conversation message.
///
/// Serializes to the lowercase role names the provider wire format expects.
///
/// # Examples
///
/// ```
/// use dossier_core::Role;
///
/// let user_role = Role::User;
/// let assistant_role = Role::Assistant;
/// assert_ne!(user_role, assistant_role);
///
/// // Wire serialization is lowercase
/// assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
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
pub enum Role {
    /// System messages provide context and instructions
    #[display("system")]
    System,
    /// User messages are from the human
    #[display("user")]
    User,
    /// Assistant messages are from the AI
    #[display("assistant")]
    Assistant,
}
