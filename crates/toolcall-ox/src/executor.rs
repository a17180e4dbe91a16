use bon::Builder;

use crate::parser::ArgumentParser;
use crate::tool::{
    FunctionDeclaration, ToolCallRequest, ToolError, ToolHandler, ToolRegistry, ToolResponse,
    validate,
};

/// Resolves and runs tool calls against a set of registered handlers.
///
/// Each request goes through the same pipeline: look the tool up by name,
/// parse the raw argument text with the configured parser, validate the
/// resulting mapping against the tool's declared parameters, then hand it
/// to the handler.
///
/// The parser defaults to strict JSON decoding; accepting recovered
/// malformed payloads is a construction-time choice.
///
/// # Examples
///
/// ```
/// use toolcall_ox::{ArgumentParser, ToolExecutor};
///
/// let executor = ToolExecutor::builder()
///     .parser(ArgumentParser::with_recovery())
///     .build();
/// assert!(executor.registry().is_empty());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ToolExecutor {
    /// Registered tool handlers, looked up by declared name.
    #[builder(field)]
    registry: ToolRegistry,
    /// Parser applied to each request's raw argument text.
    #[builder(default)]
    parser: ArgumentParser,
}

impl<S: tool_executor_builder::State> ToolExecutorBuilder<S> {
    /// Registers a handler on the executor's `ToolRegistry`.
    ///
    /// This is a convenience method that simplifies registering handlers
    /// during the build process.
    pub fn handler(mut self, handler: impl ToolHandler + 'static) -> Self {
        self.registry.register(handler);
        self
    }
}

impl ToolExecutor {
    /// Returns the argument parser in use.
    pub fn parser(&self) -> &ArgumentParser {
        &self.parser
    }

    /// Returns the registry of tool handlers.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Returns the declarations of all registered tools.
    pub fn declarations(&self) -> Vec<FunctionDeclaration> {
        self.registry.declarations()
    }

    /// Executes a single tool call request.
    ///
    /// Fails without invoking the handler if the tool is unknown, the
    /// argument text cannot be parsed, or the parsed mapping does not
    /// satisfy the tool's declaration.
    pub async fn execute(&self, request: ToolCallRequest) -> Result<ToolResponse, ToolError> {
        let handler = self
            .registry
            .get(&request.name)
            .ok_or_else(|| ToolError::not_found(request.name.clone()))?;

        let args = self
            .parser
            .parse(&request.arguments)
            .map_err(|error| ToolError::invalid_arguments(request.name.clone(), error))?;

        let declaration = handler.declaration();
        validate(&declaration, &args)?;

        tracing::debug!(tool = %request.name, "executing tool call");
        let content = handler.call(args).await?;

        Ok(ToolResponse::new(request.id, request.name, content))
    }
}
