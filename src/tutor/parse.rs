use crate::TutorError;

pub const REGEX_MARKER: &str = "REGEX:";
pub const EXPLANATION_MARKER: &str = "EXPLANATION:";

/// Stored in place of the pattern when the reply has no `REGEX:` marker
pub const UNPARSED_REGEX: &str = "Could not parse response";

/// A model reply split into its two sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub regex: String,
    pub explanation: String,
}

/// Text between the first occurrence of `marker` and the next one (or the end)
fn segment_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let (_, rest) = text.split_once(marker)?;
    Some(before(rest, marker))
}

/// Text before the first occurrence of `marker`, or all of it
fn before<'a>(text: &'a str, marker: &str) -> &'a str {
    match text.find(marker) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Split a model reply on the literal `REGEX:` / `EXPLANATION:` markers.
///
/// This is a plain substring split. The extracted pattern is never checked
/// for validity, and marker text inside either section produces whatever
/// split the rules below give.
///
/// - No `REGEX:` at all: the whole trimmed reply becomes the explanation and
///   the pattern is [`UNPARSED_REGEX`].
/// - `REGEX:` without `EXPLANATION:`: the reply cannot be split and a
///   [`TutorError::Parse`] is returned.
pub fn parse_response(response: &str) -> Result<Generation, TutorError> {
    let output = response.trim();

    let Some(regex_segment) = segment_after(output, REGEX_MARKER) else {
        tracing::debug!("Reply has no {} marker, keeping it as explanation", REGEX_MARKER);
        return Ok(Generation {
            regex: UNPARSED_REGEX.to_string(),
            explanation: output.to_string(),
        });
    };

    let regex = before(regex_segment, EXPLANATION_MARKER).trim();
    let explanation = segment_after(output, EXPLANATION_MARKER)
        .ok_or_else(|| {
            TutorError::Parse(format!("reply has no {} section", EXPLANATION_MARKER))
        })?
        .trim();

    Ok(Generation {
        regex: regex.to_string(),
        explanation: explanation.to_string(),
    })
}
