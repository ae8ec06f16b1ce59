//! Outbound messaging through an Evolution-API-compatible WhatsApp gateway.
//!
//! One request shape: `POST {base}/message/sendText/{instance}` with the
//! API key in an `apikey` header and a `{number, text}` JSON body. Nothing
//! is retried; a transport failure bubbles up and the webhook responds 500,
//! while a non-2xx gateway status is only logged and the webhook still
//! acknowledges.

use crate::config::gateway::GatewaySettings;
use crate::errors::Result;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct SendTextRequest<'a> {
    number: &'a str,
    text: &'a str,
}

/// Client for the outbound send-text API.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    settings: GatewaySettings,
}

impl GatewayClient {
    /// Creates a client over the given gateway settings.
    #[must_use]
    pub fn new(settings: GatewaySettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    /// Sends one text message to a WhatsApp number.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Gateway`] only when the gateway cannot
    /// be reached at the transport level.
    pub async fn send_text(&self, number: &str, text: &str) -> Result<()> {
        let url = format!(
            "{}/message/sendText/{}",
            self.settings.base_url, self.settings.instance
        );

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.settings.api_key)
            .json(&SendTextRequest { number, text })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(%status, number, "reply sent");
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body, "gateway rejected reply");
        }

        Ok(())
    }
}
