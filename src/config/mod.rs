mod loader;

pub use loader::{load_config, load_config_from};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Environment variable holding the API key. Falls back to the
    /// provider's conventional name when unset.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Override for the provider's API endpoint
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key_env: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    /// Name of the environment variable the API key is read from
    pub fn api_key_env(&self) -> &str {
        if let Some(name) = &self.api_key_env {
            return name;
        }
        match self.provider.as_str() {
            "anthropic" => "ANTHROPIC_API_KEY",
            _ => "GEMINI_API_KEY",
        }
    }

    /// Human-readable provider name for status messages
    pub fn provider_label(&self) -> &str {
        match self.provider.as_str() {
            "gemini" => "Gemini",
            "anthropic" => "Claude",
            other => other,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_input_height")]
    pub input_height: u16,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_input_height() -> u16 {
    5
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            input_height: default_input_height(),
        }
    }
}
