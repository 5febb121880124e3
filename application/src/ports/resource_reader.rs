//! Resource reader port
//!
//! Read-only access to the documents listed by `resources/list`.

use async_trait::async_trait;
use corethink_domain::resource::{ResourceContents, ResourceDescriptor};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Failed to read resource {uri}: {source}")]
    Read {
        uri: String,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait ResourceReaderPort: Send + Sync {
    /// Every readable resource, in a stable order.
    fn list(&self) -> Vec<ResourceDescriptor>;

    /// Read one resource by URI.
    async fn read(&self, uri: &str) -> Result<ResourceContents, ResourceError>;
}
