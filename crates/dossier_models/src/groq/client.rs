use crate::groq::{GroqChatRequest, GroqChatResponse, GroqWireMessage};
use dossier_core::{ChatRequest, ChatResponse};
use dossier_error::{GroqErrorKind, ModelsError, ModelsResult};
use dossier_interface::ChatDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

const DEFAULT_TEMPERATURE: f32 = 1.0;
const DEFAULT_TOP_P: f32 = 1.0;
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Groq chat-completions client.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GroqClient {
    /// Creates a new Groq client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Groq API key
    /// * `model` - Model identifier (e.g., "llama3-8b-8192")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!("Creating new Groq client");
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    /// Sends a request to the Groq API.
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn generate_groq(&self, request: &GroqChatRequest) -> ModelsResult<GroqChatResponse> {
        debug!("Sending request to Groq API");

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Groq API");
                ModelsError::new(GroqErrorKind::Http(format!("Request failed: {}", e)).into())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Groq API returned error");
            let kind = if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                GroqErrorKind::RateLimit
            } else {
                GroqErrorKind::Api(format!("API error {}: {}", status, body))
            };
            return Err(ModelsError::new(kind.into()));
        }

        let groq_response: GroqChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Groq response");
            ModelsError::new(
                GroqErrorKind::ResponseParsing(format!("Failed to parse response: {}", e)).into(),
            )
        })?;

        debug!(
            choices = groq_response.choices.len(),
            "Received response from Groq"
        );
        Ok(groq_response)
    }

    /// Converts a ChatRequest to a Groq API request.
    ///
    /// The system prompt, when present, becomes a leading `system`-role
    /// message per the OpenAI-compatible convention.
    fn convert_request(&self, request: &ChatRequest) -> GroqChatRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);

        if let Some(system) = &request.system {
            messages.push(GroqWireMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }

        for msg in &request.messages {
            messages.push(GroqWireMessage {
                role: msg.role.to_string(),
                content: msg.content.clone(),
            });
        }

        GroqChatRequest {
            model: self.model.clone(),
            messages,
            temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            top_p: request.top_p.unwrap_or(DEFAULT_TOP_P),
            stream: false,
            stop: None,
        }
    }

    /// Converts a Groq API response to a ChatResponse.
    fn convert_response(response: &GroqChatResponse) -> ModelsResult<ChatResponse> {
        let choice = response
            .choices
            .first()
            .ok_or_else(|| ModelsError::new(GroqErrorKind::EmptyResponse.into()))?;

        Ok(ChatResponse::new(choice.message.content.clone()))
    }
}

#[async_trait::async_trait]
impl ChatDriver for GroqClient {
    fn provider_name(&self) -> &'static str {
        "groq"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(provider = "groq", model = %self.model))]
    async fn generate(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatResponse, dossier_error::DossierError> {
        debug!("Generating response with Groq");

        let groq_request = self.convert_request(request);
        let groq_response = self.generate_groq(&groq_request).await?;
        let response = Self::convert_response(&groq_response)?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::{Message, Role};

    #[test]
    fn test_convert_request_prepends_system_message() {
        let client = GroqClient::new("test-key", "llama3-8b-8192");
        let request = ChatRequest::builder()
            .system("Background.".to_string())
            .messages(vec![Message::new(Role::User, "Hi")])
            .build()
            .unwrap();

        let wire = client.convert_request(&request);
        assert_eq!(wire.messages.len(), 2);
        assert_eq!(wire.messages[0].role, "system");
        assert_eq!(wire.messages[0].content, "Background.");
        assert_eq!(wire.messages[1].role, "user");
    }

    #[test]
    fn test_convert_request_fixed_sampling_defaults() {
        let client = GroqClient::new("test-key", "llama3-8b-8192");
        let request = ChatRequest::builder()
            .messages(vec![Message::new(Role::User, "Hi")])
            .build()
            .unwrap();

        let wire = client.convert_request(&request);
        assert_eq!(wire.temperature, 1.0);
        assert_eq!(wire.top_p, 1.0);
        assert_eq!(wire.max_tokens, 1000);
        assert!(!wire.stream);
        assert!(wire.stop.is_none());
    }

    #[test]
    fn test_convert_response_empty_choices() {
        let response = GroqChatResponse { choices: vec![] };
        assert!(GroqClient::convert_response(&response).is_err());
    }
}
