mod assistant;
mod history;
mod parse;

pub use assistant::{PatternAssistant, SubmitOutcome};
pub use history::{History, HistoryEntry, RECENT_LIMIT};
pub use parse::{parse_response, Generation, EXPLANATION_MARKER, REGEX_MARKER, UNPARSED_REGEX};
