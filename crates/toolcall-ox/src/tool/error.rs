use std::error::Error as StdError;
use thiserror::Error;

use crate::parser::ParseError;

/// A type alias for a boxed error that is thread-safe.
type BoxedError = Box<dyn StdError + Send + Sync>;

/// Represents errors that can occur while resolving and running a tool call.
///
/// Preserves the original source errors where applicable, allowing for
/// detailed logging and debugging. It is not intended to be serialized or
/// sent across process boundaries directly.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No handler is registered under the requested name.
    #[error("Tool not found: {name}")]
    NotFound { name: String },

    /// The raw argument payload could not be parsed into a mapping.
    #[error("Invalid arguments for tool '{name}'")]
    InvalidArguments {
        name: String,
        /// The underlying parse failure.
        #[source]
        error: ParseError,
    },

    /// The parsed mapping does not satisfy the tool's declared parameters.
    #[error("Schema mismatch for tool '{name}': {detail}")]
    SchemaMismatch { name: String, detail: String },

    /// Failed to deserialize the validated mapping into the handler's
    /// input type.
    #[error("Input deserialization failed for tool '{name}'")]
    InputDeserialization {
        name: String,
        /// The underlying deserialization error.
        #[source]
        error: BoxedError,
    },

    /// The tool executed but failed with a specific, tool-defined error.
    #[error("Tool execution failed for tool '{name}'")]
    Execution {
        name: String,
        /// The underlying tool-specific error.
        #[source]
        error: BoxedError,
    },

    /// Failed to serialize the output of a successful tool execution.
    #[error("Output serialization failed for tool '{name}'")]
    OutputSerialization {
        name: String,
        /// The underlying serialization error.
        #[source]
        error: BoxedError,
    },
}

impl ToolError {
    /// Creates a "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Creates an "invalid arguments" error wrapping the parse failure.
    pub fn invalid_arguments(name: impl Into<String>, error: ParseError) -> Self {
        Self::InvalidArguments {
            name: name.into(),
            error,
        }
    }

    /// Creates a "schema mismatch" error describing the offending parameter.
    pub fn schema_mismatch(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            name: name.into(),
            detail: detail.into(),
        }
    }

    /// Creates an "input deserialization" error, wrapping the source error.
    pub fn input_deserialization(
        name: impl Into<String>,
        error: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::InputDeserialization {
            name: name.into(),
            error: Box::new(error),
        }
    }

    /// Creates a "tool execution" error, wrapping the tool's specific error.
    pub fn execution(
        name: impl Into<String>,
        error: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Execution {
            name: name.into(),
            error: Box::new(error),
        }
    }

    /// Creates an "output serialization" error, wrapping the source error.
    pub fn output_serialization(
        name: impl Into<String>,
        error: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::OutputSerialization {
            name: name.into(),
            error: Box::new(error),
        }
    }
}
