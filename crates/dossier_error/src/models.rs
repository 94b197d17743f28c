//! Model provider error types.

/// Groq API error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GroqErrorKind {
    /// API returned a non-success status
    #[display("Groq API error: {}", _0)]
    Api(String),
    /// Rate limit exceeded
    #[display("Groq rate limit exceeded")]
    RateLimit,
    /// Request was invalid (missing key, bad parameters)
    #[display("Invalid Groq request: {}", _0)]
    InvalidRequest(String),
    /// Transport-level failure sending the request
    #[display("Groq HTTP error: {}", _0)]
    Http(String),
    /// Response body could not be parsed
    #[display("Groq response parsing error: {}", _0)]
    ResponseParsing(String),
    /// Response was well-formed but contained no choices
    #[display("Groq response contained no choices")]
    EmptyResponse,
}

/// Model provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum ModelsErrorKind {
    /// Groq provider error
    #[from(GroqErrorKind)]
    Groq(GroqErrorKind),
}

/// Model provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use dossier_error::{GroqErrorKind, ModelsError};
///
/// let err = ModelsError::new(GroqErrorKind::RateLimit.into());
/// assert!(format!("{}", err).contains("rate limit"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at line {} in {}", kind, line, file)]
pub struct ModelsError {
    /// The kind of error that occurred
    pub kind: ModelsErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new ModelsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for model provider operations.
pub type ModelsResult<T> = std::result::Result<T, ModelsError>;
