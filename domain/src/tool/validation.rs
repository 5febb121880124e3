//! Argument validation
//!
//! Structural checks run before any dispatch work is spent: every required
//! field must be present and every declared field that is present must have
//! the declared kind. Unknown extra fields pass through untouched so newer
//! clients can send arguments older catalogs do not know about.

use super::entities::{ToolSpec, value_kind_name};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A present argument whose value has the wrong kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMismatch {
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl std::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (expected {}, got {})",
            self.field, self.expected, self.actual
        )
    }
}

/// Every structural problem found in one argument mapping.
///
/// Both lists follow the tool's parameter declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub tool: String,
    pub missing_fields: Vec<String>,
    pub type_mismatches: Vec<TypeMismatch>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if !self.missing_fields.is_empty() {
            parts.push(format!(
                "missing required field(s): {}",
                self.missing_fields.join(", ")
            ));
        }
        if !self.type_mismatches.is_empty() {
            let mismatches: Vec<String> =
                self.type_mismatches.iter().map(|m| m.to_string()).collect();
            parts.push(format!("type mismatch(es): {}", mismatches.join(", ")));
        }
        write!(
            f,
            "Invalid arguments for tool '{}': {}",
            self.tool,
            parts.join("; ")
        )
    }
}

impl std::error::Error for ValidationError {}

/// Validator for tool arguments
///
/// This is a pure domain trait: no I/O, never blocks.
pub trait ArgumentValidator: Send + Sync {
    /// Validate an argument mapping against a tool's contract
    fn validate(
        &self,
        spec: &ToolSpec,
        args: &HashMap<String, serde_json::Value>,
    ) -> Result<(), ValidationError>;
}

/// Default implementation of [`ArgumentValidator`]
#[derive(Debug, Clone, Default)]
pub struct DefaultArgumentValidator;

impl ArgumentValidator for DefaultArgumentValidator {
    fn validate(
        &self,
        spec: &ToolSpec,
        args: &HashMap<String, serde_json::Value>,
    ) -> Result<(), ValidationError> {
        let mut missing_fields = Vec::new();
        let mut type_mismatches = Vec::new();

        for param in &spec.parameters {
            match args.get(&param.name) {
                None if param.required => missing_fields.push(param.name.clone()),
                None => {}
                Some(value) if !param.kind.matches(value) => type_mismatches.push(TypeMismatch {
                    field: param.name.clone(),
                    expected: param.kind.to_string(),
                    actual: value_kind_name(value).to_string(),
                }),
                Some(_) => {}
            }
        }

        if missing_fields.is_empty() && type_mismatches.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                tool: spec.name.clone(),
                missing_fields,
                type_mismatches,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::{ParamKind, ToolParameter};
    use serde_json::json;

    fn spec() -> ToolSpec {
        ToolSpec::new("validate_against_constraints", "Validate")
            .with_parameter(ToolParameter::new("change_description", "Change", true))
            .with_parameter(
                ToolParameter::new("constraint_categories", "Categories", false)
                    .with_kind(ParamKind::StringArray),
            )
            .with_parameter(
                ToolParameter::new("dry_run", "Dry run", true).with_kind(ParamKind::Boolean),
            )
    }

    fn args(value: serde_json::Value) -> HashMap<String, serde_json::Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_call() {
        let result = DefaultArgumentValidator.validate(
            &spec(),
            &args(json!({
                "change_description": "rename module",
                "constraint_categories": ["api", "tests"],
                "dry_run": true
            })),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_reports_exactly_the_missing_fields() {
        let err = DefaultArgumentValidator
            .validate(&spec(), &args(json!({})))
            .unwrap_err();

        assert_eq!(err.missing_fields, vec!["change_description", "dry_run"]);
        assert!(err.type_mismatches.is_empty());
        assert!(err.to_string().contains("change_description, dry_run"));
    }

    #[test]
    fn test_reports_every_mismatch() {
        let err = DefaultArgumentValidator
            .validate(
                &spec(),
                &args(json!({
                    "change_description": 42,
                    "constraint_categories": ["api", 7],
                    "dry_run": "yes"
                })),
            )
            .unwrap_err();

        assert!(err.missing_fields.is_empty());
        let fields: Vec<_> = err.type_mismatches.iter().map(|m| m.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["change_description", "constraint_categories", "dry_run"]
        );
        assert_eq!(err.type_mismatches[0].expected, "string");
        assert_eq!(err.type_mismatches[0].actual, "integer");
    }

    #[test]
    fn test_missing_and_mismatch_together() {
        let err = DefaultArgumentValidator
            .validate(&spec(), &args(json!({"dry_run": null})))
            .unwrap_err();

        assert_eq!(err.missing_fields, vec!["change_description"]);
        assert_eq!(err.type_mismatches.len(), 1);
        assert_eq!(err.type_mismatches[0].actual, "null");

        let message = err.to_string();
        assert!(message.starts_with("Invalid arguments for tool 'validate_against_constraints'"));
        assert!(message.contains("missing required field(s): change_description"));
        assert!(message.contains("dry_run (expected boolean, got null)"));
    }

    #[test]
    fn test_unknown_extra_fields_tolerated() {
        let result = DefaultArgumentValidator.validate(
            &spec(),
            &args(json!({
                "change_description": "x",
                "dry_run": false,
                "future_option": {"nested": 1}
            })),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_optional_field_may_be_absent() {
        let result = DefaultArgumentValidator.validate(
            &spec(),
            &args(json!({"change_description": "x", "dry_run": false})),
        );
        assert!(result.is_ok());
    }
}
