//! Built-in tool catalog
//!
//! The five reasoning tools the worker serves, followed by any custom tools
//! from configuration in name order.

use crate::config::FileToolsConfig;
use corethink_domain::DomainError;
use corethink_domain::tool::{ParamKind, ToolParameter, ToolRegistry, ToolSpec};

pub const REASON_ABOUT_CHANGE: &str = "reason_about_change";
pub const VALIDATE_AGAINST_CONSTRAINTS: &str = "validate_against_constraints";
pub const EXECUTE_WITH_SAFEGUARDS: &str = "execute_with_safeguards";
pub const ORCHESTRATE_MULTI_STEP_REASONING: &str = "orchestrate_multi_step_reasoning";
pub const LEARN_DYNAMIC_CONSTRAINTS: &str = "learn_dynamic_constraints";

/// Names of the built-in tools, in catalog order.
pub const BUILTIN_TOOL_NAMES: [&str; 5] = [
    REASON_ABOUT_CHANGE,
    VALIDATE_AGAINST_CONSTRAINTS,
    EXECUTE_WITH_SAFEGUARDS,
    ORCHESTRATE_MULTI_STEP_REASONING,
    LEARN_DYNAMIC_CONSTRAINTS,
];

pub fn reason_about_change_definition() -> ToolSpec {
    ToolSpec::new(
        REASON_ABOUT_CHANGE,
        "Apply General Symbolics Reasoning to evaluate proposed changes",
    )
    .with_parameter(ToolParameter::new(
        "change_description",
        "Natural language description of the proposed change",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "context_info",
        "Additional context information (optional)",
        false,
    ))
}

pub fn validate_against_constraints_definition() -> ToolSpec {
    ToolSpec::new(
        VALIDATE_AGAINST_CONSTRAINTS,
        "Validate proposed changes against safety constraints",
    )
    .with_parameter(ToolParameter::new(
        "change_description",
        "Description of the change to validate",
        true,
    ))
    .with_parameter(
        ToolParameter::new(
            "constraint_categories",
            "Specific constraint categories to check (optional)",
            false,
        )
        .with_kind(ParamKind::StringArray),
    )
}

pub fn execute_with_safeguards_definition() -> ToolSpec {
    ToolSpec::new(
        EXECUTE_WITH_SAFEGUARDS,
        "Execute changes in a safe, isolated environment",
    )
    .with_parameter(ToolParameter::new(
        "change_description",
        "Description of the change to execute",
        true,
    ))
    .with_parameter(
        ToolParameter::new(
            "dry_run",
            "Whether to perform a dry run without actual execution",
            false,
        )
        .with_kind(ParamKind::Boolean)
        .with_default(true),
    )
}

pub fn orchestrate_multi_step_reasoning_definition() -> ToolSpec {
    ToolSpec::new(
        ORCHESTRATE_MULTI_STEP_REASONING,
        "Orchestrates multi-step reasoning for complex task decomposition.",
    )
    .with_parameter(ToolParameter::new(
        "task_description",
        "Task to decompose into reasoning steps",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "available_tools",
        "Tools the plan may use",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "conversation_history",
        "Conversation so far",
        true,
    ))
}

pub fn learn_dynamic_constraints_definition() -> ToolSpec {
    ToolSpec::new(
        LEARN_DYNAMIC_CONSTRAINTS,
        "Learns dynamic constraints from interaction patterns and violations.",
    )
    .with_parameter(ToolParameter::new(
        "interaction_history",
        "Past interactions to learn from",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "constraint_violations",
        "Observed constraint violations",
        true,
    ))
    .with_parameter(ToolParameter::new(
        "domain_context",
        "Domain the constraints apply to",
        true,
    ))
}

/// The built-in tools in catalog order.
pub fn builtin_tools() -> Vec<ToolSpec> {
    vec![
        reason_about_change_definition(),
        validate_against_constraints_definition(),
        execute_with_safeguards_definition(),
        orchestrate_multi_step_reasoning_definition(),
        learn_dynamic_constraints_definition(),
    ]
}

/// Build the registry: built-ins first, then configured tools by name.
///
/// Fails on unknown parameter types and on duplicate names.
pub fn build_registry(tools: &FileToolsConfig) -> Result<ToolRegistry, DomainError> {
    let custom = tools
        .custom
        .iter()
        .map(|(name, tool)| tool.to_tool_spec(name))
        .collect::<Result<Vec<_>, _>>()?;

    ToolRegistry::new()
        .register_all(builtin_tools())?
        .register_all(custom)
}
