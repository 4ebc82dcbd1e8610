use crate::config::Config;
use crate::TutorError;
use std::time::Duration;

use super::providers::{AnthropicClient, GeminiClient};

/// A hosted text-generation model: one prompt in, one completion out
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, TutorError>;
}

/// Create a generator based on configuration.
///
/// A missing API key is not an error here; the provider rejects the
/// request and the failure is shown like any other remote error.
pub fn create_client(config: &Config) -> Result<Box<dyn Generator>, TutorError> {
    let key_env = config.llm.api_key_env();
    let api_key = std::env::var(key_env).unwrap_or_else(|_| {
        tracing::warn!("API key not found in environment variable: {}", key_env);
        String::new()
    });

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.llm.timeout_secs))
        .build()?;

    let base_url = config.llm.base_url.clone();

    match config.llm.provider.as_str() {
        "gemini" => {
            tracing::info!("Using Gemini provider");
            Ok(Box::new(GeminiClient::new(http, api_key, base_url)))
        }
        "anthropic" => {
            tracing::info!("Using Anthropic provider");
            Ok(Box::new(AnthropicClient::new(http, api_key, base_url)))
        }
        provider => Err(TutorError::Config(format!(
            "Unsupported LLM provider: {}",
            provider
        ))),
    }
}
