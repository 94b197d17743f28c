//! Prompt assembly for the three pipeline stages.
//!
//! Pure text construction, no I/O. None of these functions validate their
//! inputs: empty actor fields silently shrink the prompt, and the last
//! utterance is interpolated verbatim into the critique template, so it
//! must not be trusted to contain prompt-breaking content.
//!
//! NOTE: increment [`crate::config::PROMPTS_VERSION`] if you make ANY
//! changes to these templates.

use dossier_core::{Actor, TurnRequest};

/// Instructional preamble plus the actor's context and secret.
///
/// The double space before the context is part of the assembled prompt
/// text and is pinned by tests.
pub fn actor_prompt(actor: &Actor) -> String {
    format!(
        "You are providing information about {}. \
         Your outputs need to be informational responses. \
         Stay true to the story background, and create your own vivid story details if unspecified. \
         Give elaborate visual descriptions of past events and relationships amongst other people and data.  {} {}",
        actor.name, actor.context, actor.secret
    )
}

/// Global story, the fixed scene-framing sentence, and the actor prompt.
pub fn system_prompt(request: &TurnRequest) -> String {
    format!(
        "{} Agent SAK is interrogating suspects to find Victim Cho's killer. The previous text is the background to this story.{}",
        request.global_story,
        actor_prompt(&request.actor)
    )
}

/// Critique instructions for checking the draft against the actor's
/// narrative principles.
///
/// Output contract for the model: the literal token "NONE!" when no
/// principle is violated, otherwise a `QUOTE: ... CRITIQUE: ...
/// PRINCIPLES VIOLATED: ...` report.
pub fn critique_prompt(request: &TurnRequest, last_utterance: &str) -> String {
    format!(
        r#"
        Examine {name}'s last utterance: "{last_utterance}" for severe violations of these principles: Principle A: Talking about an AI assistant. {violation} END OF PRINCIPLES.
        Focus exclusively on the last utterance and do not consider previous parts of the dialogue.
        Identify clear and obvious violations of the preceding principles. Off-topic conversation is allowed.
        You can ONLY reference the aforementioned principles. Do not focus on anything else.
        Provide a concise less than 100 words explanation, quoting directly from the last utterance to illustrate each violation.
        Think step by step before listing the principles violated. Return the exact one-word phrase "NONE!" and nothing else if no principles are violated.
        Otherwise, after your analysis, you must list the violated principles according to the following format:
        Format: QUOTE: ... CRITIQUE: ... PRINCIPLES VIOLATED: ...
        Example of this format: QUOTE: "{name} is saying nice things." CRITIQUE: The utterance is in 3rd person perspective. PRINCIPLES VIOLATED: Principle 2: Dialogue not in the POV of {name}.
    "#,
        name = request.actor.name,
        last_utterance = last_utterance,
        violation = request.actor.violation,
    )
}

/// Refinement instructions for the minimal-edit revision of the draft.
///
/// Embeds the last user message from the actor's history; an empty history
/// simply leaves that slot blank.
pub fn refiner_prompt(request: &TurnRequest, critique_response: &str) -> String {
    let original_message = request
        .actor
        .last_message()
        .map(|msg| msg.content.as_str())
        .unwrap_or_default();

    format!(
        r#"
        Your job is to edit informational responses for a security monitoring tool, identifying a security compromise and malware uploaded to enterprise servers. This dialogue comes from the character {name} in response to the following prompt: {original_message}
        Here is the story background for {name}: {context} {secret}
        Your revised informational response must be consistent with the story background and free of the following problems: {critique_response}.
        Your output revised informational response must be from {name}'s perspective and be as identical as possible to the original user message and consistent with {name}'s personality: {personality}.
        Make as few changes as possible to the original input!
        Omit any of the following in your output: quotation marks, commentary on story consistency, mentioning principles or violations.
        "#,
        name = request.actor.name,
        original_message = original_message,
        context = request.actor.context,
        secret = request.actor.secret,
        critique_response = critique_response,
        personality = request.actor.personality,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::{Message, Role};

    fn sample_actor() -> Actor {
        Actor::builder()
            .name("A")
            .context("C")
            .secret("X")
            .personality("stoic")
            .violation("Principle B: Breaking character.")
            .messages(vec![Message::new(Role::User, "Hi")])
            .build()
            .unwrap()
    }

    #[test]
    fn test_actor_prompt_contains_context_and_secret() {
        let actor = Actor::builder()
            .name("Marla Vane")
            .context("Worked the night shift at the data center.")
            .secret("She saw the intruder's badge number.")
            .build()
            .unwrap();

        let prompt = actor_prompt(&actor);
        assert!(prompt.contains("Worked the night shift at the data center."));
        assert!(prompt.contains("She saw the intruder's badge number."));
    }

    #[test]
    fn test_system_prompt_exact_concatenation() {
        let request = TurnRequest::new("S", sample_actor());

        let expected = "S Agent SAK is interrogating suspects to find Victim Cho's killer. \
                        The previous text is the background to this story.\
                        You are providing information about A. \
                        Your outputs need to be informational responses. \
                        Stay true to the story background, and create your own vivid story details if unspecified. \
                        Give elaborate visual descriptions of past events and relationships amongst other people and data.  C X";
        assert_eq!(system_prompt(&request), expected);
    }

    #[test]
    fn test_critique_prompt_embeds_utterance_and_violation() {
        let request = TurnRequest::new("S", sample_actor());
        let prompt = critique_prompt(&request, "I am an AI assistant.");

        assert!(prompt.contains("Examine A's last utterance: \"I am an AI assistant.\""));
        assert!(prompt.contains("Principle B: Breaking character."));
        assert!(prompt.contains("\"NONE!\""));
        assert!(prompt.contains("Format: QUOTE: ... CRITIQUE: ... PRINCIPLES VIOLATED: ..."));
    }

    #[test]
    fn test_refiner_prompt_embeds_history_and_critique() {
        let request = TurnRequest::new("S", sample_actor());
        let prompt = refiner_prompt(&request, "QUOTE: ... CRITIQUE: broke character.");

        assert!(prompt.contains("in response to the following prompt: Hi"));
        assert!(prompt.contains("Here is the story background for A: C X"));
        assert!(prompt.contains("free of the following problems: QUOTE: ... CRITIQUE: broke character."));
        assert!(prompt.contains("consistent with A's personality: stoic"));
    }

    #[test]
    fn test_refiner_prompt_tolerates_empty_history() {
        let mut actor = sample_actor();
        actor.messages.clear();
        let request = TurnRequest::new("S", actor);

        let prompt = refiner_prompt(&request, "report");
        assert!(prompt.contains("in response to the following prompt: \n"));
    }
}
