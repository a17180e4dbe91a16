use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::warn;

use super::{ArgumentMapping, ParseError};

/// Outcome of a single parsing strategy.
#[derive(Debug)]
pub enum StrategyOutcome {
    /// The strategy produced an argument mapping.
    Parsed(ArgumentMapping),
    /// The payload is not this strategy's shape; later strategies may still
    /// apply.
    NotApplicable {
        /// The decode error that ruled the strategy out, when one exists.
        decode_error: Option<serde_json::Error>,
    },
    /// Terminal failure; no later strategy is tried.
    Failed(ParseError),
}

/// A single attempt at turning a raw argument payload into a mapping.
///
/// Strategies run in the order they were added to an
/// [`ArgumentParser`](super::ArgumentParser); the first outcome other than
/// [`StrategyOutcome::NotApplicable`] decides the result.
pub trait ParseStrategy: dyn_clone::DynClone + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Attempts to parse the payload.
    fn try_parse(&self, payload: &str) -> StrategyOutcome;
}

dyn_clone::clone_trait_object!(ParseStrategy);

/// Strict JSON decoding.
///
/// An empty or whitespace-only payload is an empty mapping: providers send
/// an empty arguments string for functions declared with zero parameters.
/// A payload that decodes to a non-object is a terminal failure, since the
/// model produced valid but unusable JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictJson;

impl ParseStrategy for StrictJson {
    fn name(&self) -> &'static str {
        "strict_json"
    }

    fn try_parse(&self, payload: &str) -> StrategyOutcome {
        if payload.trim().is_empty() {
            return StrategyOutcome::Parsed(ArgumentMapping::new());
        }

        match serde_json::from_str::<Value>(payload) {
            Ok(Value::Object(mapping)) => StrategyOutcome::Parsed(mapping),
            Ok(other) => StrategyOutcome::Failed(ParseError::not_a_dictionary(&other)),
            Err(error) => StrategyOutcome::NotApplicable {
                decode_error: Some(error),
            },
        }
    }
}

// identifier = "value", with single or repeated quote characters that are
// not required to pair up; the value runs to the payload's final quote run.
static KEY_VALUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)([A-Za-z_][A-Za-z0-9_]*)\s*=\s*["']+(.*?)["']+\s*$"#)
        .expect("key-value recovery pattern compiles")
});

/// Heuristic recovery of a single `name = "value"` assignment.
///
/// Large string-valued arguments (embedded source code in particular) often
/// arrive with quoting that breaks strict decoding but still follows a
/// recognizable assignment shape. This strategy captures the leftmost
/// identifier and the literal text between the quote run after its `=` and
/// the closing quote run at the end of the payload. No unescaping or type
/// coercion happens: the value is always a string. Payloads carrying more
/// than one malformed parameter are out of scope and fall through to the
/// chain's failure path.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValueRecovery;

impl ParseStrategy for KeyValueRecovery {
    fn name(&self) -> &'static str {
        "key_value_recovery"
    }

    fn try_parse(&self, payload: &str) -> StrategyOutcome {
        let Some(captures) = KEY_VALUE_PATTERN.captures(payload) else {
            return StrategyOutcome::NotApplicable { decode_error: None };
        };

        let (Some(key), Some(value)) = (captures.get(1), captures.get(2)) else {
            return StrategyOutcome::NotApplicable { decode_error: None };
        };

        warn!(
            key = key.as_str(),
            value_len = value.as_str().len(),
            "recovered single key-value pair from malformed arguments"
        );

        let mut mapping = ArgumentMapping::new();
        mapping.insert(
            key.as_str().to_string(),
            Value::String(value.as_str().to_string()),
        );
        StrategyOutcome::Parsed(mapping)
    }
}
