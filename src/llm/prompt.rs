/// Build the tutor prompt for a pattern description.
///
/// The description is interpolated as typed, surrounding whitespace included.
pub fn regex_tutor_prompt(description: &str) -> String {
    format!(
        r#"
You are a Regex Tutor.

The user described a text pattern as: "{description}"

1. Generate the correct regex pattern.
2. Explain the pattern in simple terms, breaking down each component.
3. Do not return any code or markdown formatting.

Reply in this format:
REGEX: <pattern>
EXPLANATION: <explanation>
"#
    )
}
