pub mod error;
pub mod strategy;

pub use error::ParseError;
pub use strategy::{KeyValueRecovery, ParseStrategy, StrategyOutcome, StrictJson};

use serde_json::Value;

/// Argument names mapped to their decoded values.
///
/// Key order carries no meaning; the mapping is created and consumed within
/// a single tool invocation.
pub type ArgumentMapping = serde_json::Map<String, Value>;

/// Names the JSON kind of a decoded value.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An ordered chain of parsing strategies for tool-call argument payloads.
///
/// Strategies run in sequence; the first outcome other than "not applicable"
/// decides the result. The default chain decodes strict JSON only; recovery
/// of malformed payloads is an opt-in override chosen wherever the executor
/// is constructed.
#[derive(Clone)]
pub struct ArgumentParser {
    strategies: Vec<Box<dyn ParseStrategy>>,
}

impl std::fmt::Debug for ArgumentParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentParser")
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for ArgumentParser {
    fn default() -> Self {
        Self::strict()
    }
}

impl ArgumentParser {
    /// Strict JSON decoding only.
    pub fn strict() -> Self {
        Self {
            strategies: vec![Box::new(StrictJson)],
        }
    }

    /// Strict JSON decoding with single-assignment recovery as the fallback.
    pub fn with_recovery() -> Self {
        Self::strict().with_strategy(KeyValueRecovery)
    }

    /// Appends a strategy to the end of the chain.
    pub fn add_strategy(&mut self, strategy: impl ParseStrategy + 'static) {
        self.strategies.push(Box::new(strategy));
    }

    /// Appends a strategy using a builder pattern.
    pub fn with_strategy(mut self, strategy: impl ParseStrategy + 'static) -> Self {
        self.add_strategy(strategy);
        self
    }

    /// Parses a raw argument payload into a mapping.
    ///
    /// Runs every strategy in order. When all of them decline, the failure
    /// wraps the strict decoder's original syntax error so the caller sees
    /// what was wrong with the payload in the first place.
    pub fn parse(&self, payload: &str) -> Result<ArgumentMapping, ParseError> {
        let mut decode_error = None;

        for strategy in &self.strategies {
            match strategy.try_parse(payload) {
                StrategyOutcome::Parsed(mapping) => return Ok(mapping),
                StrategyOutcome::Failed(error) => return Err(error),
                StrategyOutcome::NotApplicable {
                    decode_error: reason,
                } => {
                    tracing::debug!(strategy = strategy.name(), "parse strategy not applicable");
                    if decode_error.is_none() {
                        decode_error = reason;
                    }
                }
            }
        }

        // A chain composed without the strict strategy never saw a decode error.
        let source = decode_error.unwrap_or_else(|| {
            <serde_json::Error as serde::de::Error>::custom("no parsing strategy applied")
        });

        Err(ParseError::unrecoverable(source))
    }
}

/// Parses a tool-call argument payload with recovery enabled.
///
/// Equivalent to [`ArgumentParser::with_recovery`] followed by
/// [`ArgumentParser::parse`]: strict JSON first, then the single-assignment
/// heuristic, then failure carrying the original syntax error.
pub fn parse(payload: &str) -> Result<ArgumentMapping, ParseError> {
    ArgumentParser::with_recovery().parse(payload)
}
