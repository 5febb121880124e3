//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod resources;
mod server;
mod tools;
mod worker;

pub use logging::FileLoggingConfig;
pub use resources::FileResourcesConfig;
pub use server::FileServerConfig;
pub use tools::{FileCustomToolConfig, FileCustomToolParameter, FileToolsConfig};
pub use worker::FileWorkerConfig;

use super::issue::ConfigIssue;
use crate::tools::catalog::BUILTIN_TOOL_NAMES;
use corethink_domain::tool::ParamKind;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Server identity
    pub server: FileServerConfig,
    /// Worker location and invocation
    pub worker: FileWorkerConfig,
    /// Resource file locations
    pub resources: FileResourcesConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
    /// Extra catalog entries
    pub tools: FileToolsConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors abort startup; warnings are only logged.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.worker.candidates.is_empty() {
            issues.push(ConfigIssue::error(
                "worker.candidates",
                "at least one worker location is required",
            ));
        }
        if self.worker.interpreter.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "worker.interpreter",
                "interpreter cannot be empty",
            ));
        }
        if self.worker.timeout_secs == Some(0) {
            issues.push(ConfigIssue::error(
                "worker.timeout_secs",
                "timeout_secs cannot be 0 (omit it to disable the deadline)",
            ));
        }

        for (name, tool) in &self.tools.custom {
            let field = format!("tools.custom.{}", name);
            if BUILTIN_TOOL_NAMES.contains(&name.as_str()) {
                issues.push(ConfigIssue::error(
                    field.clone(),
                    format!("'{}' is a built-in tool and cannot be redefined", name),
                ));
            }
            if tool.description.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    field.clone(),
                    "description is empty; clients will see a blank tool description",
                ));
            }
            for (param_name, param) in &tool.parameters {
                if let Err(e) = param.param_type.parse::<ParamKind>() {
                    issues.push(ConfigIssue::error(
                        format!("{}.parameters.{}.type", field, param_name),
                        e.to_string(),
                    ));
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::issue::Severity;
    use corethink_application::InputDelivery;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
name = "corethink-dev"

[worker]
candidates = ["worker.py"]
input = "stdin"

[resources]
constraints = "rules/constraints.txt"

[logging]
level = "debug"
dispatch_log = "logs/dispatch.jsonl"

[tools.custom.echo]
description = "Echo the arguments"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.name, "corethink-dev");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.worker.input, InputDelivery::Stdin);
        assert_eq!(config.worker.interpreter, "python");
        assert_eq!(
            config.resources.constraints,
            PathBuf::from("rules/constraints.txt")
        );
        assert_eq!(
            config.resources.feature_flags,
            PathBuf::from("conf/feature_flags.yaml")
        );
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.logging.trace_file.is_none());
        assert!(config.tools.custom.contains_key("echo"));
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let toml_str = r#"
[worker]
candidates = []
timeout_secs = 0

[tools.custom.reason_about_change]
description = "Shadow a built-in"

[tools.custom.blank]
description = ""

[tools.custom.blank.parameters.x]
type = "tensor"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"worker.candidates"));
        assert!(fields.contains(&"worker.timeout_secs"));
        assert!(fields.contains(&"tools.custom.reason_about_change"));
        assert!(fields.contains(&"tools.custom.blank.parameters.x.type"));

        let warnings: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "tools.custom.blank");
    }
}
