use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FunctionDeclaration, error::ToolError};
use crate::parser::{ArgumentMapping, value_kind};

/// The JSON type a declared parameter accepts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ParameterKind {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl ParameterKind {
    /// Returns `true` if `value` inhabits this kind.
    ///
    /// `Integer` only accepts numbers without a fractional part; every
    /// integer is also a valid `Number`.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

/// A single named parameter in a tool's declared signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Key the parameter is looked up under in the argument mapping.
    pub name: String,
    /// JSON type the parameter accepts.
    pub kind: ParameterKind,
    /// Whether the argument mapping must contain this parameter.
    pub required: bool,
}

impl ParameterSpec {
    /// Creates a parameter the caller must always supply.
    pub fn required(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
        }
    }

    /// Creates a parameter the caller may omit.
    pub fn optional(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
        }
    }
}

/// Checks a parsed argument mapping against a tool's declared parameters.
///
/// Every required parameter must be present, every present parameter must
/// match its declared kind, and keys with no declaration are rejected. This
/// runs before the handler sees the arguments, so a recovered payload that
/// produced the wrong shape fails here rather than inside the tool.
pub fn validate(declaration: &FunctionDeclaration, args: &ArgumentMapping) -> Result<(), ToolError> {
    for spec in &declaration.parameters {
        match args.get(&spec.name) {
            Some(value) => {
                if !spec.kind.matches(value) {
                    return Err(ToolError::schema_mismatch(
                        declaration.name.clone(),
                        format!(
                            "parameter '{}' expects {}, got {}",
                            spec.name,
                            spec.kind,
                            value_kind(value)
                        ),
                    ));
                }
            }
            None if spec.required => {
                return Err(ToolError::schema_mismatch(
                    declaration.name.clone(),
                    format!("missing required parameter '{}'", spec.name),
                ));
            }
            None => {}
        }
    }

    for key in args.keys() {
        if !declaration.parameters.iter().any(|spec| spec.name == *key) {
            return Err(ToolError::schema_mismatch(
                declaration.name.clone(),
                format!("unknown parameter '{key}'"),
            ));
        }
    }

    Ok(())
}
