use serde_yaml::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read omnifest file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse omnifest: {0}")]
    Syntax(#[from] serde_yaml::Error),
    #[error("omnifest must deserialize to a mapping, got {type_name}")]
    TopLevel {
        type_name: &'static str,
        value: Value,
    },
    #[error("omnifest must contain a key by the name of `{0}`")]
    MissingVersionKey(&'static str),
}

impl ParseError {
    /// Build a `TopLevel` error from the offending non-mapping value.
    pub(crate) fn top_level(value: Value) -> Self {
        Self::TopLevel {
            type_name: value_type_name(&value),
            value,
        }
    }
}

/// Human-readable name of a YAML value's runtime shape, for diagnostics.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
