//! Token counting for LLM audit records.
//!
//! Counts are whitespace-delimited word counts, an approximation used for
//! audit bookkeeping only. They are not tied to the provider's own token
//! accounting and make no contract with it.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Token usage statistics for a single LLM invocation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct TokenUsage {
    /// Approximate tokens in the prompt messages.
    input_tokens: usize,
    /// Approximate tokens in the response text.
    output_tokens: usize,
    /// Total (input + output).
    total_tokens: usize,
}

impl TokenUsage {
    /// Create a new token usage record.
    pub fn new(input_tokens: usize, output_tokens: usize) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }

    /// Approximate usage for a prompt/response pair by word counting.
    pub fn approximate(messages: &[Message], response: &str) -> Self {
        Self::new(count_message_words(messages), count_words(response))
    }
}

/// Count whitespace-delimited words in a text.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sum word counts across the content of a message sequence.
pub fn count_message_words(messages: &[Message]) -> usize {
    messages.iter().map(|msg| count_words(&msg.content)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("a b c"), 3);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("  leading   and trailing  "), 3);
    }

    #[test]
    fn test_count_message_words() {
        let messages = vec![Message::new(Role::User, "a b c")];
        assert_eq!(count_message_words(&messages), 3);

        let messages = vec![
            Message::new(Role::User, "one two"),
            Message::new(Role::Assistant, "three four five"),
        ];
        assert_eq!(count_message_words(&messages), 5);
    }

    #[test]
    fn test_token_usage_approximate() {
        let messages = vec![Message::new(Role::User, "a b c")];
        let usage = TokenUsage::approximate(&messages, "one two");
        assert_eq!(*usage.input_tokens(), 3);
        assert_eq!(*usage.output_tokens(), 2);
        assert_eq!(*usage.total_tokens(), 5);
    }
}
