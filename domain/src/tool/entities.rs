//! Tool domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Primitive kind a tool argument must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    String,
    Boolean,
    Integer,
    Number,
    StringArray,
    Object,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Boolean => "boolean",
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
            ParamKind::StringArray => "array<string>",
            ParamKind::Object => "object",
        }
    }

    /// Check whether a JSON value has this kind.
    ///
    /// `Number` accepts integers too; `Integer` rejects fractional numbers.
    /// `null` never matches.
    pub fn matches(&self, value: &serde_json::Value) -> bool {
        match self {
            ParamKind::String => value.is_string(),
            ParamKind::Boolean => value.is_boolean(),
            ParamKind::Integer => value.is_i64() || value.is_u64(),
            ParamKind::Number => value.is_number(),
            ParamKind::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(|v| v.is_string())),
            ParamKind::Object => value.is_object(),
        }
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParamKind {
    type Err = DomainError;

    /// Parse a type hint as written in configuration files.
    ///
    /// `path` is accepted as an alias for `string`, and both `array` and
    /// `string[]` mean an array of strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" | "path" => Ok(ParamKind::String),
            "boolean" | "bool" => Ok(ParamKind::Boolean),
            "integer" => Ok(ParamKind::Integer),
            "number" => Ok(ParamKind::Number),
            "array" | "string[]" | "array<string>" => Ok(ParamKind::StringArray),
            "object" => Ok(ParamKind::Object),
            other => Err(DomainError::UnknownParamKind(other.to_string())),
        }
    }
}

/// Name of the kind a JSON value actually has, for mismatch messages.
pub fn value_kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(n) if n.is_f64() => "number",
        serde_json::Value::Number(_) => "integer",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Primitive kind of the argument value
    pub kind: ParamKind,
    /// Advertised default; informational only, never injected into calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            kind: ParamKind::String,
            default: None,
        }
    }

    pub fn with_kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_default(mut self, default: impl Into<serde_json::Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Contract of one callable tool.
///
/// `worker_tool` is the name handed to the worker process. It defaults to
/// `name` and only differs for configured tools that alias a worker tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Unique name of the tool (e.g., "reason_about_change")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications, in declaration order
    pub parameters: Vec<ToolParameter>,
    /// Tool name passed to the worker
    pub worker_tool: String,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            worker_tool: name.clone(),
            name,
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn with_worker_tool(mut self, worker_tool: impl Into<String>) -> Self {
        self.worker_tool = worker_tool.into();
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ToolParameter> {
        self.parameters.iter().filter(|p| p.required)
    }
}

/// One invocation attempt, as received from the protocol layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Name of the tool to call
    #[serde(rename = "name")]
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCallRequest {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_param_kind_matches() {
        assert!(ParamKind::String.matches(&json!("text")));
        assert!(!ParamKind::String.matches(&json!(1)));
        assert!(ParamKind::Boolean.matches(&json!(true)));
        assert!(ParamKind::Integer.matches(&json!(3)));
        assert!(!ParamKind::Integer.matches(&json!(3.5)));
        assert!(ParamKind::Number.matches(&json!(3)));
        assert!(ParamKind::Number.matches(&json!(3.5)));
        assert!(ParamKind::StringArray.matches(&json!(["a", "b"])));
        assert!(ParamKind::StringArray.matches(&json!([])));
        assert!(!ParamKind::StringArray.matches(&json!(["a", 1])));
        assert!(ParamKind::Object.matches(&json!({"k": "v"})));
        assert!(!ParamKind::Object.matches(&serde_json::Value::Null));
    }

    #[test]
    fn test_param_kind_from_str() {
        assert_eq!("string".parse::<ParamKind>().unwrap(), ParamKind::String);
        assert_eq!("path".parse::<ParamKind>().unwrap(), ParamKind::String);
        assert_eq!("Boolean".parse::<ParamKind>().unwrap(), ParamKind::Boolean);
        assert_eq!("string[]".parse::<ParamKind>().unwrap(), ParamKind::StringArray);
        assert!(matches!(
            "tensor".parse::<ParamKind>(),
            Err(DomainError::UnknownParamKind(k)) if k == "tensor"
        ));
    }

    #[test]
    fn test_value_kind_name() {
        assert_eq!(value_kind_name(&json!(null)), "null");
        assert_eq!(value_kind_name(&json!(1)), "integer");
        assert_eq!(value_kind_name(&json!(1.5)), "number");
        assert_eq!(value_kind_name(&json!(["x"])), "array");
    }

    #[test]
    fn test_tool_spec_builder() {
        let spec = ToolSpec::new("reason_about_change", "Reason about a change")
            .with_parameter(ToolParameter::new("change_description", "The change", true))
            .with_parameter(
                ToolParameter::new("dry_run", "Dry run", false).with_kind(ParamKind::Boolean),
            );

        assert_eq!(spec.worker_tool, "reason_about_change");
        assert_eq!(spec.parameters.len(), 2);
        assert_eq!(spec.required_parameters().count(), 1);
        assert_eq!(spec.parameter("dry_run").unwrap().kind, ParamKind::Boolean);
        assert!(spec.parameter("dry_run").unwrap().default.is_none());
        assert!(spec.parameter("missing").is_none());
    }

    #[test]
    fn test_worker_tool_override() {
        let spec = ToolSpec::new("quick_check", "Alias").with_worker_tool("validate_against_constraints");
        assert_eq!(spec.name, "quick_check");
        assert_eq!(spec.worker_tool, "validate_against_constraints");
    }

    #[test]
    fn test_tool_call_request_deserialize_without_arguments() {
        let request: ToolCallRequest = serde_json::from_value(json!({"name": "x"})).unwrap();
        assert_eq!(request.tool_name, "x");
        assert!(request.arguments.is_empty());
    }

    #[test]
    fn test_tool_call_request_builder() {
        let request = ToolCallRequest::new("reason_about_change").with_arg("change_description", "rename");
        assert_eq!(request.get_string("change_description"), Some("rename"));
        assert_eq!(request.get_string("other"), None);
    }
}
