mod aggregate_root;

pub use aggregate_root::AggregateRoot;

use serde::{Deserialize, Serialize};

/// Backend primary keys are plain integers.
pub type EntityId = i64;

/// Error body returned by the backend for every non-2xx response.
///
/// `detail` is usually a message, but validation failures carry a list of
/// objects, so it is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// Human readable detail, if the server sent one.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .map(str::to_string)
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(", "))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_detail() {
        let body: ApiErrorBody =
            serde_json::from_value(json!({"detail": "ラベル設定が見つかりません"})).unwrap();
        assert_eq!(body.message().as_deref(), Some("ラベル設定が見つかりません"));
    }

    #[test]
    fn test_validation_detail_list() {
        let body: ApiErrorBody = serde_json::from_value(json!({
            "detail": [
                {"loc": ["body", "email"], "msg": "value is not a valid email address"},
                {"loc": ["body", "password"], "msg": "field required"}
            ]
        }))
        .unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("value is not a valid email address, field required")
        );
    }

    #[test]
    fn test_missing_detail() {
        let body: ApiErrorBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(body.message(), None);
        let body: ApiErrorBody = serde_json::from_value(json!({"detail": ""})).unwrap();
        assert_eq!(body.message(), None);
    }
}
