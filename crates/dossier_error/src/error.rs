//! Top-level error wrapper types.

#[cfg(feature = "database")]
use crate::DatabaseError;
use crate::{ConfigError, DialogueError, HttpError, JsonError, ModelsError};

/// This is the foundation error enum for the dossier workspace.
///
/// # Examples
///
/// ```
/// use dossier_error::{DossierError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: DossierError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum DossierErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Dialogue pipeline error
    #[from(DialogueError)]
    Dialogue(DialogueError),
}

/// Dossier error with kind discrimination.
///
/// # Examples
///
/// ```
/// use dossier_error::{DossierResult, ConfigError};
///
/// fn might_fail() -> DossierResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Dossier Error: {}", _0)]
pub struct DossierError(Box<DossierErrorKind>);

impl DossierError {
    /// Create a new error from a kind.
    pub fn new(kind: DossierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DossierErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to DossierErrorKind
impl<T> From<T> for DossierError
where
    T: Into<DossierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for dossier operations.
///
/// # Examples
///
/// ```
/// use dossier_error::{DossierResult, HttpError};
///
/// fn fetch_data() -> DossierResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type DossierResult<T> = std::result::Result<T, DossierError>;
