use serde_json::Value;
use thiserror::Error;

/// Represents errors raised while parsing a tool-call argument payload.
///
/// There are exactly two failure causes, and callers are expected to treat
/// either one as "this tool call is currently unusable": a payload that
/// decodes cleanly to something other than an object, and a payload that
/// neither decodes nor matches any recovery strategy.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload is valid JSON but not an object.
    #[error("Tool call must be a dictionary.")]
    NotADictionary {
        /// JSON kind the payload decoded to.
        kind: &'static str,
    },

    /// Strict decoding failed and no strategy produced a mapping.
    #[error("Invalid tool call: {source}")]
    Unrecoverable {
        /// The syntax error from the strict decode attempt.
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    /// Creates a "not a dictionary" error naming the decoded value's kind.
    pub fn not_a_dictionary(value: &Value) -> Self {
        Self::NotADictionary {
            kind: super::value_kind(value),
        }
    }

    /// Creates an "unrecoverable" error wrapping the strict decoder's
    /// original syntax error.
    pub fn unrecoverable(source: serde_json::Error) -> Self {
        Self::Unrecoverable { source }
    }
}
