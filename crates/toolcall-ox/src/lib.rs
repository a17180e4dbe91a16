pub mod executor;
pub mod parser;
pub mod tool;

// Re-export commonly used types
pub use executor::ToolExecutor;
pub use parser::{ArgumentMapping, ArgumentParser, ParseError, parse};
pub use tool::{
    FunctionDeclaration, ParameterKind, ParameterSpec, ToolCallRequest, ToolError, ToolHandler,
    ToolRegistry, ToolResponse, schema_for_type, validate,
};
