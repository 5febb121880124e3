//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that produces the
//! `{name, description, inputSchema}` entries of `tools/list`.

use corethink_application::ports::tool_schema::ToolSchemaPort;
use corethink_domain::tool::{ParamKind, ToolSpec};
use serde_json::{Map, Value, json};

/// Default implementation producing JSON Schema input descriptions.
///
/// Handles kind → JSON Schema mapping:
/// - `String` → `"string"`
/// - `StringArray` → `"array"` with `items: {type: "string"}`
/// - `Boolean`, `Integer`, `Number`, `Object` → same-named type
pub struct JsonSchemaToolConverter;

fn kind_schema(kind: ParamKind) -> Map<String, Value> {
    let mut prop = Map::new();
    let schema_type = match kind {
        ParamKind::String => "string",
        ParamKind::Boolean => "boolean",
        ParamKind::Integer => "integer",
        ParamKind::Number => "number",
        ParamKind::Object => "object",
        ParamKind::StringArray => {
            prop.insert("items".to_string(), json!({"type": "string"}));
            "array"
        }
    };
    prop.insert("type".to_string(), json!(schema_type));
    prop
}

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolSpec) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let mut prop = kind_schema(param.kind);
            prop.insert("description".to_string(), json!(param.description));
            if let Some(default) = &param.default {
                prop.insert("default".to_string(), default.clone());
            }
            properties.insert(param.name.clone(), Value::Object(prop));

            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "name": tool.name,
            "description": tool.description,
            "inputSchema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }
}
