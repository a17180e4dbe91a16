use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents a request to call a tool function.
///
/// `arguments` is the raw text exactly as the model produced it. OpenAI
/// format providers transmit arguments as a JSON-encoded string rather
/// than a JSON value, and models routinely emit text in that slot that is
/// not valid JSON at all, so decoding is deferred to the executor's
/// argument parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Unique identifier for this tool call.
    pub id: String,
    /// Name of the function to call.
    pub name: String,
    /// Raw argument text to pass to the function.
    pub arguments: String,
}

impl ToolCallRequest {
    /// Creates a new ToolCallRequest with the given id, name, and raw
    /// argument text.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

/// Result from a tool execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// ID of the tool call this is responding to.
    pub id: String,
    /// Name of the tool that was called.
    pub name: String,
    /// The result data from the tool execution.
    pub content: Value,
}

impl ToolResponse {
    /// Creates a new ToolResponse.
    pub fn new(id: impl Into<String>, name: impl Into<String>, content: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content,
        }
    }
}
