//! Helpers shared by the catalog tools.

use rmcp::model::CallToolResult;
use serde_json::Value;
use tracing::warn;

use crate::domains::catalog::CatalogResult;

/// Turn a catalog outcome into a tool result.
///
/// Both branches carry the JSON body as text and as structured content; a
/// failure payload additionally sets `isError`.
pub fn catalog_result(outcome: CatalogResult) -> CallToolResult {
    match outcome {
        Ok(body) => CallToolResult::structured(body),
        Err(failure) => {
            warn!("Catalog call failed: {}", failure.error);
            CallToolResult::structured_error(failure.to_value())
        }
    }
}

/// Render a tool result in the shape the HTTP transport returns.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> Value {
    let mut response = serde_json::Map::new();
    response.insert(
        "content".to_string(),
        serde_json::to_value(&result.content).unwrap_or(Value::Array(Vec::new())),
    );
    response.insert(
        "isError".to_string(),
        Value::Bool(result.is_error.unwrap_or(false)),
    );
    if let Some(structured) = result.structured_content {
        response.insert("structuredContent".to_string(), structured);
    }
    Value::Object(response)
}

/// Structured content of a tool result, or `Null` when there is none.
pub fn structured(result: &CallToolResult) -> &Value {
    static NULL: Value = Value::Null;
    result.structured_content.as_ref().unwrap_or(&NULL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::{CatalogError, Echo, ErrorResult};
    use serde_json::json;

    #[test]
    fn test_success_result() {
        let result = catalog_result(Ok(json!({ "result": [] })));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(structured(&result), &json!({ "result": [] }));
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn test_failure_result() {
        let failure = ErrorResult::new(&CatalogError::Status(500), Echo::Query("tv".into()));
        let result = catalog_result(Err(failure));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(structured(&result)["status"], "failed");
        assert_eq!(structured(&result)["query"], "tv");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_response_shape() {
        let response = http_response(catalog_result(Ok(json!({ "ok": true }))));
        assert_eq!(response["isError"], false);
        assert_eq!(response["structuredContent"], json!({ "ok": true }));
        assert!(response["content"].is_array());
    }
}
