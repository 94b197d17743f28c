//! Turn request types.

use crate::Actor;
use serde::{Deserialize, Serialize};

/// Inputs for one round of actor response generation.
///
/// Constructed fresh per turn by the caller; never persisted directly.
///
/// # Examples
///
/// ```
/// use dossier_core::{Actor, TurnRequest};
///
/// let actor = Actor::builder().name("Marla Vane").build().unwrap();
/// let request = TurnRequest::new("A storm knocked out the cameras.", actor);
/// assert_eq!(request.actor.name, "Marla Vane");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRequest {
    /// Free-text scenario background shared by all actors
    pub global_story: String,
    /// The actor responding this turn
    pub actor: Actor,
}

impl TurnRequest {
    /// Create a new turn request.
    pub fn new(global_story: impl Into<String>, actor: Actor) -> Self {
        Self {
            global_story: global_story.into(),
            actor,
        }
    }
}
