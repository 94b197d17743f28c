//! Process configuration for the dialogue pipeline.

use dossier_error::{ConfigError, DossierResult};

/// Default model identifier sent to Groq.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Fixed output-token budget for every pipeline call.
pub const MAX_TOKENS: u32 = 1000;

/// Prompt template version. Increment whenever any prompt text changes so
/// the model key distinguishes audit rows across template revisions.
pub const PROMPTS_VERSION: &str = "1.0.5";

/// Default base URL of the local automation service.
pub const DEFAULT_WEBHOOK_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Process-wide configuration, constructed once at startup and passed by
/// reference into the adapters that need it.
///
/// # Examples
///
/// ```
/// use dossier_dialogue::DossierConfig;
///
/// let config = DossierConfig::builder()
///     .groq_api_key("gsk_test")
///     .database_url("postgres://localhost/dossier")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model_key(), "llama3-8b-8192:1000:1.0.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder)]
#[builder(setter(into))]
pub struct DossierConfig {
    /// Groq API key
    pub groq_api_key: String,
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Model identifier sent to the provider
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    pub model: String,
    /// Maximum output tokens per call
    #[builder(default = "MAX_TOKENS")]
    pub max_tokens: u32,
    /// Prompt template version folded into the model key
    #[builder(default = "PROMPTS_VERSION.to_string()")]
    pub prompts_version: String,
    /// Base URL of the automation webhook service
    #[builder(default = "DEFAULT_WEBHOOK_ENDPOINT.to_string()")]
    pub webhook_endpoint: String,
}

impl DossierConfig {
    /// Create a builder for constructing a configuration.
    pub fn builder() -> DossierConfigBuilder {
        DossierConfigBuilder::default()
    }

    /// Load configuration from the environment (and a `.env` file if present).
    ///
    /// Required: `GROQ_API_KEY`, `DATABASE_URL`.
    /// Optional: `DOSSIER_MODEL`, `DOSSIER_WEBHOOK_ENDPOINT`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing.
    pub fn from_env() -> DossierResult<Self> {
        dotenvy::dotenv().ok();

        let groq_api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| ConfigError::new("GROQ_API_KEY environment variable not set"))?;
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::new("DATABASE_URL environment variable not set"))?;
        let model = std::env::var("DOSSIER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let webhook_endpoint = std::env::var("DOSSIER_WEBHOOK_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_WEBHOOK_ENDPOINT.to_string());

        Ok(Self {
            groq_api_key,
            database_url,
            model,
            max_tokens: MAX_TOKENS,
            prompts_version: PROMPTS_VERSION.to_string(),
            webhook_endpoint,
        })
    }

    /// Composite audit tag of model id, token limit, and prompt version.
    pub fn model_key(&self) -> String {
        format!("{}:{}:{}", self.model, self.max_tokens, self.prompts_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_key_composition() {
        let config = DossierConfig::builder()
            .groq_api_key("gsk_test")
            .database_url("postgres://localhost/dossier")
            .model("llama3-70b-8192")
            .build()
            .unwrap();

        assert_eq!(config.model_key(), "llama3-70b-8192:1000:1.0.5");
    }

    #[test]
    fn test_builder_defaults() {
        let config = DossierConfig::builder()
            .groq_api_key("gsk_test")
            .database_url("postgres://localhost/dossier")
            .build()
            .unwrap();

        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, MAX_TOKENS);
        assert_eq!(config.webhook_endpoint, DEFAULT_WEBHOOK_ENDPOINT);
    }
}
