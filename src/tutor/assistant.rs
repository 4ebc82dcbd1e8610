use crate::llm::prompt::regex_tutor_prompt;
use crate::llm::Generator;
use crate::tutor::history::{History, HistoryEntry};
use crate::tutor::parse::{parse_response, Generation};
use crate::TutorError;

/// What a single submit produced, for the caller to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent; the input needs fixing
    Warning(String),
    /// A new entry, already appended to history
    Generated(HistoryEntry),
    /// The call failed; history is unchanged
    Failed(String),
}

/// Per-session assistant: owns the generator and the session history
pub struct PatternAssistant {
    generator: Box<dyn Generator>,
    history: History,
}

impl PatternAssistant {
    pub fn new(generator: Box<dyn Generator>) -> Self {
        Self {
            generator,
            history: History::new(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Reject descriptions that are blank once trimmed
    pub fn validate(description: &str) -> Result<(), TutorError> {
        if description.trim().is_empty() {
            return Err(TutorError::EmptyDescription);
        }
        Ok(())
    }

    /// Ask the model about `description` and split its reply.
    ///
    /// Does not touch history, so the caller may keep reading it while the
    /// request is in flight.
    pub async fn generate(&self, description: &str) -> Result<Generation, TutorError> {
        let prompt = regex_tutor_prompt(description);
        tracing::info!(chars = description.len(), "Requesting regex");

        let response = self.generator.generate(&prompt).await?;
        tracing::debug!(chars = response.len(), "Received reply");

        parse_response(&response)
    }

    /// Record the result of [`generate`](Self::generate)
    pub fn complete(
        &mut self,
        description: &str,
        result: Result<Generation, TutorError>,
    ) -> SubmitOutcome {
        match result {
            Ok(generation) => {
                let entry = HistoryEntry {
                    description: description.to_string(),
                    regex: generation.regex,
                    explanation: generation.explanation,
                };
                self.history.push(entry.clone());
                SubmitOutcome::Generated(entry)
            }
            Err(e) => {
                tracing::warn!("Generation failed: {}", e);
                SubmitOutcome::Failed(format!("Something went wrong: {}", e))
            }
        }
    }

    pub async fn submit(&mut self, description: &str) -> SubmitOutcome {
        if let Err(e) = Self::validate(description) {
            return SubmitOutcome::Warning(e.to_string());
        }

        let result = self.generate(description).await;
        self.complete(description, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockGenerator;
    use crate::tutor::{RECENT_LIMIT, UNPARSED_REGEX};

    fn replying(reply: &'static str) -> MockGenerator {
        let mut mock = MockGenerator::new();
        mock.expect_generate()
            .returning(move |_| Ok(reply.to_string()));
        mock
    }

    #[tokio::test]
    async fn test_blank_description_warns_without_calling() {
        let mut mock = MockGenerator::new();
        mock.expect_generate().never();
        let mut assistant = PatternAssistant::new(Box::new(mock));

        for description in ["", "   ", "\n\t "] {
            let outcome = assistant.submit(description).await;
            assert_eq!(
                outcome,
                SubmitOutcome::Warning("Please enter a valid description.".to_string())
            );
        }
        assert!(assistant.history().is_empty());
    }

    #[tokio::test]
    async fn test_successful_submit_appends_entry() {
        let mut mock = MockGenerator::new();
        mock.expect_generate()
            .withf(|prompt: &str| prompt.contains(r#"as: "an email address""#))
            .times(1)
            .returning(|_| {
                Ok(concat!(
                    r"REGEX: ^[\w.+-]+@[\w-]+\.[a-zA-Z]{2,}$",
                    "\nEXPLANATION: Matches a local part, an @ symbol, a domain, and a top-level domain."
                )
                .to_string())
            });
        let mut assistant = PatternAssistant::new(Box::new(mock));

        let outcome = assistant.submit("an email address").await;
        let expected = HistoryEntry {
            description: "an email address".to_string(),
            regex: r"^[\w.+-]+@[\w-]+\.[a-zA-Z]{2,}$".to_string(),
            explanation: "Matches a local part, an @ symbol, a domain, and a top-level domain."
                .to_string(),
        };
        assert_eq!(outcome, SubmitOutcome::Generated(expected.clone()));
        assert_eq!(assistant.history().entries(), &[expected]);
    }

    #[tokio::test]
    async fn test_description_is_sent_untrimmed() {
        let mut mock = MockGenerator::new();
        mock.expect_generate()
            .withf(|prompt: &str| prompt.contains(r#"as: "  digits  ""#))
            .times(1)
            .returning(|_| Ok("REGEX: \\d+\nEXPLANATION: digits".to_string()));
        let mut assistant = PatternAssistant::new(Box::new(mock));

        match assistant.submit("  digits  ").await {
            SubmitOutcome::Generated(entry) => assert_eq!(entry.description, "  digits  "),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_reply_still_recorded() {
        let mut assistant = PatternAssistant::new(Box::new(replying("Sure! Here is something.")));

        let outcome = assistant.submit("anything").await;
        let expected = HistoryEntry {
            description: "anything".to_string(),
            regex: UNPARSED_REGEX.to_string(),
            explanation: "Sure! Here is something.".to_string(),
        };
        assert_eq!(outcome, SubmitOutcome::Generated(expected));
        assert_eq!(assistant.history().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_call_records_nothing() {
        let mut mock = MockGenerator::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Err(TutorError::Llm("timed out".to_string())));
        let mut assistant = PatternAssistant::new(Box::new(mock));

        match assistant.submit("a date").await {
            SubmitOutcome::Failed(message) => {
                assert!(message.starts_with("Something went wrong:"));
                assert!(message.contains("timed out"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(assistant.history().is_empty());
    }

    #[tokio::test]
    async fn test_reply_missing_explanation_fails() {
        let mut assistant = PatternAssistant::new(Box::new(replying("REGEX: [a-z]+")));

        assert!(matches!(
            assistant.submit("letters").await,
            SubmitOutcome::Failed(_)
        ));
        assert!(assistant.history().is_empty());
    }

    #[tokio::test]
    async fn test_session_usable_after_failure() {
        let mut mock = MockGenerator::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(TutorError::Llm("quota exceeded".to_string())));
        mock.expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("REGEX: x\nEXPLANATION: the letter x".to_string()));
        let mut assistant = PatternAssistant::new(Box::new(mock));

        assert!(matches!(assistant.submit("x").await, SubmitOutcome::Failed(_)));
        assert!(matches!(assistant.submit("x").await, SubmitOutcome::Generated(_)));
        assert_eq!(assistant.history().len(), 1);
    }

    #[tokio::test]
    async fn test_history_after_seven_submissions() {
        let mut assistant =
            PatternAssistant::new(Box::new(replying("REGEX: .\nEXPLANATION: any char")));

        for n in 1..=7 {
            let outcome = assistant.submit(&format!("pattern {}", n)).await;
            assert!(matches!(outcome, SubmitOutcome::Generated(_)));
        }

        assert_eq!(assistant.history().len(), 7);
        let shown: Vec<_> = assistant
            .history()
            .recent()
            .map(|(seq, entry)| (seq, entry.description.clone()))
            .collect();
        assert_eq!(shown.len(), RECENT_LIMIT);
        assert_eq!(
            shown,
            vec![
                (1, "pattern 7".to_string()),
                (2, "pattern 6".to_string()),
                (3, "pattern 5".to_string()),
                (4, "pattern 4".to_string()),
                (5, "pattern 3".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_generate_then_complete_matches_submit() {
        let mut assistant =
            PatternAssistant::new(Box::new(replying("REGEX: a|b\nEXPLANATION: a or b")));

        let result = assistant.generate("a or b").await;
        assert!(assistant.history().is_empty());

        let outcome = assistant.complete("a or b", result);
        assert!(matches!(outcome, SubmitOutcome::Generated(_)));
        assert_eq!(assistant.history().len(), 1);
    }
}
