pub mod anthropic;
pub mod gemini;

pub use anthropic::AnthropicClient;
pub use gemini::GeminiClient;
