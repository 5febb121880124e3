//! Tools configuration from TOML (`[tools]` section)

use corethink_domain::DomainError;
use corethink_domain::tool::{ParamKind, ToolParameter, ToolSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Custom tool parameter definition
///
/// ```toml
/// [tools.custom.quick_check.parameters.change_description]
/// type = "string"
/// description = "Change to check"
/// required = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCustomToolParameter {
    /// Parameter type: "string", "boolean", "integer", "number", "array", "object"
    #[serde(rename = "type", default = "default_string_type")]
    pub param_type: String,
    /// Human-readable description of the parameter
    #[serde(default)]
    pub description: String,
    /// Whether this parameter is required (default: true)
    #[serde(default = "default_true")]
    pub required: bool,
}

fn default_string_type() -> String {
    "string".to_string()
}

fn default_true() -> bool {
    true
}

/// Custom tool definition
///
/// Exposes an extra catalog entry served by the same worker, optionally
/// under a different worker tool name.
///
/// ```toml
/// [tools.custom.quick_check]
/// description = "Constraint check with a fixed category set"
/// worker_tool = "validate_against_constraints"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCustomToolConfig {
    /// Human-readable description of what this tool does
    pub description: String,
    /// Tool name passed to the worker (default: the table name)
    #[serde(default)]
    pub worker_tool: Option<String>,
    /// Parameter definitions, ordered by name
    #[serde(default)]
    pub parameters: BTreeMap<String, FileCustomToolParameter>,
}

impl FileCustomToolConfig {
    /// Build the catalog entry for this tool.
    pub fn to_tool_spec(&self, name: &str) -> Result<ToolSpec, DomainError> {
        let mut spec = ToolSpec::new(name, self.description.clone());
        if let Some(worker_tool) = &self.worker_tool {
            spec = spec.with_worker_tool(worker_tool.clone());
        }
        for (param_name, param) in &self.parameters {
            let kind: ParamKind = param.param_type.parse()?;
            spec = spec.with_parameter(
                ToolParameter::new(param_name.clone(), param.description.clone(), param.required)
                    .with_kind(kind),
            );
        }
        Ok(spec)
    }
}

/// Complete tools configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolsConfig {
    /// Custom tools, appended to the built-in catalog in name order
    pub custom: BTreeMap<String, FileCustomToolConfig>,
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use super::*;

    #[test]
    fn test_tools_config_default() {
        assert!(FileToolsConfig::default().custom.is_empty());
    }

    #[test]
    fn test_custom_tool_deserialize() {
        let toml_str = r#"
[tools.custom.quick_check]
description = "Quick constraint check"
worker_tool = "validate_against_constraints"

[tools.custom.quick_check.parameters.change_description]
description = "Change to check"

[tools.custom.quick_check.parameters.strict]
type = "boolean"
description = "Fail on warnings"
required = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let tool = &config.tools.custom["quick_check"];
        assert_eq!(tool.worker_tool.as_deref(), Some("validate_against_constraints"));
        assert_eq!(tool.parameters["change_description"].param_type, "string");
        assert!(tool.parameters["change_description"].required);

        let spec = tool.to_tool_spec("quick_check").unwrap();
        assert_eq!(spec.worker_tool, "validate_against_constraints");
        let names: Vec<_> = spec.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["change_description", "strict"]);
        assert_eq!(spec.parameter("strict").unwrap().kind, ParamKind::Boolean);
        assert!(!spec.parameter("strict").unwrap().required);
    }

    #[test]
    fn test_worker_tool_defaults_to_name() {
        let tool = FileCustomToolConfig {
            description: "Echo".to_string(),
            worker_tool: None,
            parameters: BTreeMap::new(),
        };
        assert_eq!(tool.to_tool_spec("echo").unwrap().worker_tool, "echo");
    }

    #[test]
    fn test_unknown_parameter_type() {
        let mut parameters = BTreeMap::new();
        parameters.insert(
            "x".to_string(),
            FileCustomToolParameter {
                param_type: "tensor".to_string(),
                description: String::new(),
                required: true,
            },
        );
        let tool = FileCustomToolConfig {
            description: "Bad".to_string(),
            worker_tool: None,
            parameters,
        };
        assert_eq!(
            tool.to_tool_spec("bad").unwrap_err(),
            DomainError::UnknownParamKind("tensor".to_string())
        );
    }
}
