//! Resource domain: read-only documents the server exposes next to its tools.

use serde::{Deserialize, Serialize};

/// Descriptor advertised by `resources/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

impl ResourceDescriptor {
    pub fn new(
        uri: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            description: description.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Text contents returned by `resources/read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceContents {
    pub uri: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub text: String,
}

impl ResourceContents {
    pub fn text(descriptor: &ResourceDescriptor, text: impl Into<String>) -> Self {
        Self {
            uri: descriptor.uri.clone(),
            mime_type: descriptor.mime_type.clone(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_wire_shape() {
        let descriptor = ResourceDescriptor::new(
            "file://constraints",
            "Constraints",
            "Active constraint rules",
            "text/plain",
        );
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "uri": "file://constraints",
                "name": "Constraints",
                "description": "Active constraint rules",
                "mimeType": "text/plain"
            })
        );
    }

    #[test]
    fn test_contents_inherit_descriptor() {
        let descriptor =
            ResourceDescriptor::new("file://reasoning_history", "History", "", "text/markdown");
        let contents = ResourceContents::text(&descriptor, "# History");
        assert_eq!(contents.uri, "file://reasoning_history");
        assert_eq!(contents.mime_type, "text/markdown");
        assert_eq!(contents.text, "# History");
    }
}
