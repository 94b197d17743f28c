//! Dialogue pipeline error types.

/// Dialogue pipeline error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DialogueErrorKind {
    /// Actor has no message history to respond to
    #[display("Actor '{}' has an empty message history", _0)]
    EmptyHistory(String),
}

/// Dialogue pipeline error with source location tracking.
///
/// # Examples
///
/// ```
/// use dossier_error::{DialogueError, DialogueErrorKind};
///
/// let err = DialogueError::new(DialogueErrorKind::EmptyHistory("Marla".to_string()));
/// assert!(format!("{}", err).contains("Marla"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Dialogue Error: {} at line {} in {}", kind, line, file)]
pub struct DialogueError {
    /// The kind of error that occurred
    pub kind: DialogueErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DialogueError {
    /// Create a new DialogueError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DialogueErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
