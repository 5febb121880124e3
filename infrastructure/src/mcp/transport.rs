//! Line framing and message classification.
//!
//! Every line on standard input is one JSON-RPC message. [`classify_line`]
//! is a pure function deciding what the server does with it.

use super::protocol::{JSONRPC_VERSION, JsonRpcRequest, RpcError};
use serde_json::Value;

/// What one input line turned out to be.
#[derive(Debug, PartialEq)]
pub enum Incoming {
    /// Has an `id`: exactly one response is owed.
    Request(JsonRpcRequest),
    /// No `id`: handled silently.
    Notification { method: String },
    /// Cannot be handled; answered with `error` under `id` (null when the
    /// id could not be recovered).
    Malformed { id: Value, error: RpcError },
}

pub fn classify_line(line: &str) -> Incoming {
    let value: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            return Incoming::Malformed {
                id: Value::Null,
                error: RpcError::parse_error(e),
            };
        }
    };

    let Value::Object(object) = &value else {
        return Incoming::Malformed {
            id: Value::Null,
            error: RpcError::invalid_request("Request must be a JSON object"),
        };
    };

    let id = object.get("id").cloned();
    let method = object.get("method").and_then(Value::as_str);
    let version_ok = object.get("jsonrpc").and_then(Value::as_str) == Some(JSONRPC_VERSION);

    let Some(method) = method.filter(|_| version_ok) else {
        return Incoming::Malformed {
            id: id.unwrap_or(Value::Null),
            error: RpcError::invalid_request("Expected a JSON-RPC 2.0 request with a method"),
        };
    };

    if id.is_none() {
        return Incoming::Notification {
            method: method.to_string(),
        };
    }

    match serde_json::from_value::<JsonRpcRequest>(value.clone()) {
        Ok(request) => Incoming::Request(request),
        Err(e) => Incoming::Malformed {
            id: id.unwrap_or(Value::Null),
            error: RpcError::invalid_request(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::protocol::{INVALID_REQUEST, PARSE_ERROR};
    use serde_json::json;

    #[test]
    fn classify_request() {
        let incoming = classify_line(r#"{"jsonrpc":"2.0","id":"a1","method":"tools/list"}"#);
        let Incoming::Request(request) = incoming else {
            panic!("expected request, got {:?}", incoming);
        };
        assert_eq!(request.id, json!("a1"));
        assert_eq!(request.method, "tools/list");
        assert!(request.params.is_none());
    }

    #[test]
    fn classify_notification() {
        assert_eq!(
            classify_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#),
            Incoming::Notification {
                method: "notifications/initialized".to_string()
            }
        );
    }

    #[test]
    fn classify_unparsable_line() {
        let Incoming::Malformed { id, error } = classify_line("{not json") else {
            panic!("expected malformed");
        };
        assert_eq!(id, Value::Null);
        assert_eq!(error.code, PARSE_ERROR);
    }

    #[test]
    fn classify_wrong_version_keeps_id() {
        let Incoming::Malformed { id, error } =
            classify_line(r#"{"jsonrpc":"1.0","id":3,"method":"ping"}"#)
        else {
            panic!("expected malformed");
        };
        assert_eq!(id, json!(3));
        assert_eq!(error.code, INVALID_REQUEST);
    }

    #[test]
    fn classify_non_object() {
        let Incoming::Malformed { error, .. } = classify_line("[1,2]") else {
            panic!("expected malformed");
        };
        assert_eq!(error.code, INVALID_REQUEST);
    }
}
