pub mod error;
pub mod registry;
pub mod schema;
pub mod types;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use schema::{ParameterKind, ParameterSpec, validate};
pub use types::{ToolCallRequest, ToolResponse};

use futures_util::future::BoxFuture;
use schemars::{JsonSchema, generate::SchemaSettings};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::parser::ArgumentMapping;

/// The declared signature of a tool function.
///
/// Callers look tools up by `name`; `parameters` drives argument validation
/// before the handler runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionDeclaration {
    /// Name of the function
    pub name: String,

    /// Optional description of what the function does
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameters the function accepts, in declaration order
    pub parameters: Vec<ParameterSpec>,
}

impl FunctionDeclaration {
    /// Creates a declaration with no description and no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            parameters: Vec::new(),
        }
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a parameter to the signature.
    #[must_use]
    pub fn parameter(mut self, spec: ParameterSpec) -> Self {
        self.parameters.push(spec);
        self
    }

    /// Derives a declaration from a type's JSON schema.
    ///
    /// Each top-level property becomes a parameter; properties listed in the
    /// schema's `required` array are marked required. Properties whose type
    /// has no scalar label (nested enums, untagged unions) fall back to
    /// `ParameterKind::Object`.
    pub fn for_type<T: JsonSchema>(name: impl Into<String>) -> Self {
        let schema = schema_for_type::<T>();
        let required: Vec<String> = schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let mut declaration = Self::new(name);
        if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
            for (key, property) in properties {
                let kind = property
                    .get("type")
                    .and_then(Value::as_str)
                    .and_then(|label| label.parse::<ParameterKind>().ok())
                    .unwrap_or(ParameterKind::Object);
                declaration.parameters.push(ParameterSpec {
                    name: key.clone(),
                    kind,
                    required: required.iter().any(|entry| entry == key),
                });
            }
        }
        declaration
    }

    /// Renders the parameters as a JSON schema object.
    ///
    /// This is the shape providers expect in a function-calling tool
    /// definition.
    #[must_use]
    pub fn parameters_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        for spec in &self.parameters {
            properties.insert(spec.name.clone(), json!({"type": spec.kind.to_string()}));
        }
        let required: Vec<Value> = self
            .parameters
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| Value::String(spec.name.clone()))
            .collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// Trait for objects that implement a single callable tool.
///
/// Handlers receive an argument mapping that has already been parsed and
/// validated against their declaration, so `call` can deserialize it
/// without re-checking shapes.
pub trait ToolHandler: Send + Sync + 'static {
    /// Returns the declared signature of this tool.
    fn declaration(&self) -> FunctionDeclaration;

    /// Runs the tool against a validated argument mapping.
    ///
    /// Returns a boxed future that resolves to the tool's JSON output on
    /// success or a ToolError on failure.
    fn call(&self, args: ArgumentMapping) -> BoxFuture<'_, Result<Value, ToolError>>;
}

impl<T: ToolHandler + ?Sized> ToolHandler for Arc<T> {
    fn declaration(&self) -> FunctionDeclaration {
        self.as_ref().declaration()
    }

    fn call(&self, args: ArgumentMapping) -> BoxFuture<'_, Result<Value, ToolError>> {
        self.as_ref().call(args)
    }
}

/// Generates a JSON schema for the given type using schemars.
///
/// Configures schemars for inline, OpenAPI 3 compatible output suitable for
/// function-calling tool definitions.
///
/// # Panics
///
/// Panics if the schema cannot be serialized to JSON.
#[must_use]
pub fn schema_for_type<T: JsonSchema>() -> Value {
    let settings = SchemaSettings::openapi3().with(|s| {
        s.inline_subschemas = true;
        s.meta_schema = None;
    });
    let generator = schemars::generate::SchemaGenerator::new(settings);
    let root_schema = generator.into_root_schema_for::<T>();
    let mut schema_value =
        serde_json::to_value(root_schema).expect("Failed to serialize schema to JSON");

    // Remove the title field if present
    if let Some(obj) = schema_value.as_object_mut() {
        obj.remove("title");
    }

    schema_value
}
