use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    #[error("Expected a string, but received {kind}. Input: {input}")]
    InvalidInputType { kind: &'static str, input: String },

    #[error("Unknown case style: {0}")]
    UnknownStyle(String),

    #[error("Invalid style name '{0}': use lowercase letters and digits separated by '-' or '_'")]
    InvalidStyleName(String),
}

impl CaseError {
    pub(crate) fn invalid_input(value: &Value) -> Self {
        CaseError::InvalidInputType {
            kind: value_kind(value),
            input: value.to_string(),
        }
    }
}

/// Name of the JSON type of `value`, as reported in `InvalidInputType`.
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

pub type Result<T> = std::result::Result<T, CaseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_input_message() {
        let err = CaseError::invalid_input(&json!(123));
        assert_eq!(
            err.to_string(),
            "Expected a string, but received number. Input: 123"
        );
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&Value::Null), "null");
        assert_eq!(value_kind(&json!({"a": 1})), "object");
        assert_eq!(value_kind(&json!([1, 2])), "array");
        assert_eq!(value_kind(&json!(true)), "boolean");
    }
}
