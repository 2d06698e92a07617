//! OpenAI client construction from explicit settings.

use crate::config::OpenAISettings;
use crate::error::{PlannerError, Result};
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create an OpenAI client from the configured key and timeout.
///
/// Fails when no key is configured and `OPENAI_API_KEY` is unset.
pub fn create_client(settings: &OpenAISettings) -> Result<Client<OpenAIConfig>> {
    let api_key = settings.resolve_api_key().ok_or_else(|| {
        PlannerError::Config(
            "No OpenAI API key. Set openai.api_key in the config or export OPENAI_API_KEY."
                .to_string(),
        )
    })?;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()?;

    let config = OpenAIConfig::new().with_api_key(api_key);
    Ok(Client::with_config(config).with_http_client(http_client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_with_configured_key() {
        let settings = OpenAISettings {
            api_key: Some("sk-test".to_string()),
            timeout_secs: 5,
        };
        assert!(create_client(&settings).is_ok());
    }
}
