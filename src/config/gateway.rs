//! Messaging-gateway configuration from environment variables.
//!
//! The outbound side of the bot talks to an Evolution-API-compatible
//! WhatsApp gateway. Three values identify the deployment: the gateway base
//! URL, the instance name the WhatsApp number is registered under, and the
//! API key sent with every request. All three are required - the bot cannot
//! reply without them.

use crate::errors::{Error, Result};

/// Connection settings for the Evolution-API messaging gateway.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// Base URL of the gateway, without a trailing slash (e.g. `https://wa.example.com`)
    pub base_url: String,
    /// Instance identifier the WhatsApp number is registered under
    pub instance: String,
    /// API key sent in the `apikey` header of every request
    pub api_key: String,
}

impl GatewaySettings {
    /// Loads gateway settings from `EVOLUTION_API_URL`, `EVOLUTION_INSTANCE`
    /// and `EVOLUTION_API_KEY`.
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the first variable that is missing.
    pub fn from_env() -> Result<Self> {
        let base_url = require_var("EVOLUTION_API_URL")?;
        let instance = require_var("EVOLUTION_INSTANCE")?;
        let api_key = require_var("EVOLUTION_API_KEY")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            instance,
            api_key,
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::Config {
        message: format!("{name} is not set"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_unconfigured_is_config_error() {
        // The test environment does not configure a gateway; when any of the
        // three variables is absent the error must be a Config error naming it
        if let Err(err) = GatewaySettings::from_env() {
            assert!(matches!(err, Error::Config { .. }));
            assert!(err.to_string().contains("EVOLUTION_"));
        }
    }
}
