//! Automation-service webhook context sources.

use async_trait::async_trait;
use dossier_error::{DossierResult, HttpError, JsonError};
use dossier_interface::ContextWebhook;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, error, instrument};

/// A webhook call against the local automation service.
///
/// Posts a fixed `{url, command}` JSON payload to one endpoint. A 200
/// response yields the parsed JSON body; any other status is captured as an
/// error-shaped payload rather than raised, so it still lands in the prompt
/// context. Transport failures propagate as fatal. No timeout, no retry.
pub struct AutomationWebhook {
    client: Client,
    label: String,
    endpoint: String,
    payload: serde_json::Value,
}

impl AutomationWebhook {
    /// Create a webhook handle for one automation endpoint.
    ///
    /// # Arguments
    ///
    /// * `label` - name used when folding the payload into the prompt
    /// * `endpoint` - automation service URL to POST to
    /// * `target_url` - the page the automation service should visit
    /// * `command` - the instruction for the automation service
    pub fn new(
        label: impl Into<String>,
        endpoint: impl Into<String>,
        target_url: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        let target_url: String = target_url.into();
        let command: String = command.into();
        Self {
            client: Client::new(),
            label: label.into(),
            endpoint: endpoint.into(),
            payload: json!({
                "url": target_url,
                "command": command,
            }),
        }
    }
}

#[async_trait]
impl ContextWebhook for AutomationWebhook {
    fn label(&self) -> &str {
        &self.label
    }

    #[instrument(skip(self), fields(label = %self.label, endpoint = %self.endpoint))]
    async fn fetch(&self) -> DossierResult<serde_json::Value> {
        debug!("Calling automation webhook");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&self.payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send webhook request");
                HttpError::new(format!("Webhook request failed: {}", e))
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            Ok(response
                .json()
                .await
                .map_err(|e| JsonError::new(format!("Failed to parse webhook response: {}", e)))?)
        } else {
            // Failure captured as data, not raised; it still reaches the prompt.
            debug!(status = %status, "Webhook returned non-200 status");
            Ok(json!({
                "error": format!(
                    "Failed to call webhook {}. Status code: {}",
                    self.endpoint,
                    status.as_u16()
                ),
            }))
        }
    }
}

/// The standard pair of automation webhooks the pipeline ships with,
/// reproducing the original "Friends" and "Multion" context calls.
pub fn standard_webhooks(endpoint_base: &str) -> Vec<Box<dyn ContextWebhook>> {
    vec![
        Box::new(AutomationWebhook::new(
            "Friends",
            format!("{}/api/multion_webhook", endpoint_base),
            "https://news.ycombinator.com/",
            "Find the top comment of the top post on Hackernews.",
        )),
        Box::new(AutomationWebhook::new(
            "Multion",
            format!("{}/multion_webhook", endpoint_base),
            "https://github.com",
            "Show the contribution history screenshot of MARK-BAIN github user for last year. \
             Provide details: how many repos contributed, what is primary language of use, \
             how many github stars he get, what is his linkedin and twitter accounts, \
             where he works and lives",
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_webhooks_pair() {
        let webhooks = standard_webhooks("http://127.0.0.1:8000");
        assert_eq!(webhooks.len(), 2);
        assert_eq!(webhooks[0].label(), "Friends");
        assert_eq!(webhooks[1].label(), "Multion");
    }

    #[test]
    fn test_payload_shape() {
        let webhook = AutomationWebhook::new(
            "Friends",
            "http://127.0.0.1:8000/api/multion_webhook",
            "https://news.ycombinator.com/",
            "Find the top comment of the top post on Hackernews.",
        );
        assert_eq!(
            webhook.payload,
            json!({
                "url": "https://news.ycombinator.com/",
                "command": "Find the top comment of the top post on Hackernews.",
            })
        );
    }
}
