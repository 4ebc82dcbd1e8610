pub mod config;
pub mod llm;
pub mod tui;
pub mod tutor;

pub use config::Config;
pub use tutor::{HistoryEntry, PatternAssistant, SubmitOutcome};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Could not split response: {0}")]
    Parse(String),

    #[error("Please enter a valid description.")]
    EmptyDescription,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, TutorError>;
