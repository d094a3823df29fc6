use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

pub const PRINT_PATH: &str = "/api/labels/print";

/// Body of `POST /api/labels/print`; the response is a PDF.
///
/// Without `label_setting_id` the server renders with the account's default preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPrintRequest {
    pub product_ids: Vec<EntityId>,
    /// Serialized as `YYYY-MM-DD` or `null`
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_setting_id: Option<EntityId>,
}

/// Parses the value of an `<input type="date">`; empty means "no expiry date".
pub fn parse_expiry_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| format!("Invalid date '{}': {}", raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_without_preset() {
        let req = LabelPrintRequest {
            product_ids: vec![3, 7],
            expiry_date: parse_expiry_date("2025-12-01").unwrap(),
            label_setting_id: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"product_ids": [3, 7], "expiry_date": "2025-12-01"})
        );
    }

    #[test]
    fn test_body_with_preset_and_no_expiry() {
        let req = LabelPrintRequest {
            product_ids: vec![1],
            expiry_date: None,
            label_setting_id: Some(5),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"product_ids": [1], "expiry_date": null, "label_setting_id": 5})
        );
    }

    #[test]
    fn test_parse_expiry_date() {
        assert_eq!(parse_expiry_date("").unwrap(), None);
        assert_eq!(parse_expiry_date("  ").unwrap(), None);
        assert_eq!(
            parse_expiry_date("2025-12-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 1)
        );
        assert!(parse_expiry_date("01/12/2025").is_err());
    }
}
