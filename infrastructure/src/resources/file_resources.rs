//! [`ResourceReaderPort`] over configured files.
//!
//! A configured file that does not exist is not an error: the read returns
//! a short placeholder naming the missing path.

use crate::config::FileResourcesConfig;
use async_trait::async_trait;
use corethink_application::ports::resource_reader::{ResourceError, ResourceReaderPort};
use corethink_domain::resource::{ResourceContents, ResourceDescriptor};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

struct FileResource {
    descriptor: ResourceDescriptor,
    path: PathBuf,
    /// Label used in the placeholder text when the file is absent.
    label: &'static str,
}

pub struct FileResourceReader {
    resources: Vec<FileResource>,
}

impl FileResourceReader {
    pub fn new(config: &FileResourcesConfig) -> Self {
        let resources = vec![
            FileResource {
                descriptor: ResourceDescriptor::new(
                    "file://constraints",
                    "Constraints",
                    "Active safety constraint rules (base and domain-specific)",
                    "text/plain",
                ),
                path: config.constraints.clone(),
                label: "constraints file",
            },
            FileResource {
                descriptor: ResourceDescriptor::new(
                    "file://reasoning_log",
                    "Reasoning log",
                    "Diagnostic trace of the reasoning process (trace.log)",
                    "text/plain",
                ),
                path: config.reasoning_log.clone(),
                label: "reasoning log",
            },
            FileResource {
                descriptor: ResourceDescriptor::new(
                    "file://reasoning_history",
                    "Reasoning history",
                    "Audit trail of past reasoning (reasoning_history.md)",
                    "text/markdown",
                ),
                path: config.reasoning_history.clone(),
                label: "reasoning history",
            },
            FileResource {
                descriptor: ResourceDescriptor::new(
                    "file://feature_flags",
                    "Feature flags",
                    "Feature flag settings (feature_flags.yaml)",
                    "text/yaml",
                ),
                path: config.feature_flags.clone(),
                label: "feature flags file",
            },
        ];
        Self { resources }
    }
}

#[async_trait]
impl ResourceReaderPort for FileResourceReader {
    fn list(&self) -> Vec<ResourceDescriptor> {
        self.resources.iter().map(|r| r.descriptor.clone()).collect()
    }

    async fn read(&self, uri: &str) -> Result<ResourceContents, ResourceError> {
        let resource = self
            .resources
            .iter()
            .find(|r| r.descriptor.uri == uri)
            .ok_or_else(|| ResourceError::UnknownResource(uri.to_string()))?;

        let text = match tokio::fs::read_to_string(&resource.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(uri, path = %resource.path.display(), "Resource file missing");
                format!("No {} found at {}", resource.label, resource.path.display())
            }
            Err(source) => {
                return Err(ResourceError::Read {
                    uri: uri.to_string(),
                    source,
                });
            }
        };

        Ok(ResourceContents::text(&resource.descriptor, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> FileResourcesConfig {
        FileResourcesConfig {
            constraints: dir.path().join("constraints.txt"),
            reasoning_log: dir.path().join("logs/trace.log"),
            reasoning_history: dir.path().join("logs/reasoning_history.md"),
            feature_flags: dir.path().join("conf/feature_flags.yaml"),
        }
    }

    #[test]
    fn test_list_order_and_mime_types() {
        let reader = FileResourceReader::new(&FileResourcesConfig::default());
        let listed: Vec<_> = reader
            .list()
            .into_iter()
            .map(|d| (d.uri, d.mime_type))
            .collect();

        assert_eq!(
            listed,
            vec![
                ("file://constraints".to_string(), "text/plain".to_string()),
                ("file://reasoning_log".to_string(), "text/plain".to_string()),
                ("file://reasoning_history".to_string(), "text/markdown".to_string()),
                ("file://feature_flags".to_string(), "text/yaml".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_read_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("constraints.txt"), "MUST: keep tests green\n").unwrap();
        let reader = FileResourceReader::new(&config_in(&dir));

        let contents = reader.read("file://constraints").await.unwrap();
        assert_eq!(contents.uri, "file://constraints");
        assert_eq!(contents.mime_type, "text/plain");
        assert_eq!(contents.text, "MUST: keep tests green\n");
    }

    #[tokio::test]
    async fn test_missing_file_yields_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let reader = FileResourceReader::new(&config);

        let contents = reader.read("file://reasoning_history").await.unwrap();
        assert_eq!(contents.mime_type, "text/markdown");
        assert_eq!(
            contents.text,
            format!(
                "No reasoning history found at {}",
                config.reasoning_history.display()
            )
        );
    }

    #[tokio::test]
    async fn test_unknown_uri() {
        let reader = FileResourceReader::new(&FileResourcesConfig::default());
        let err = reader.read("file://secrets").await.unwrap_err();
        assert!(matches!(err, ResourceError::UnknownResource(ref uri) if uri == "file://secrets"));
        assert_eq!(err.to_string(), "Unknown resource: file://secrets");
    }

    #[tokio::test]
    async fn test_unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(&dir);
        // A directory exists but cannot be read as text.
        config.feature_flags = dir.path().to_path_buf();
        let reader = FileResourceReader::new(&config);

        let err = reader.read("file://feature_flags").await.unwrap_err();
        assert!(matches!(err, ResourceError::Read { .. }));
    }
}
