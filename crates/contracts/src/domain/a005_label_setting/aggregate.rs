use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityId};

/// A4 sheet size in millimetres.
pub const SHEET_WIDTH_MM: f64 = 210.0;
pub const SHEET_HEIGHT_MM: f64 = 297.0;

pub const DEFAULT_PATH: &str = "/api/labels/settings/default";

/// Named label print preset.
///
/// At most one preset per account has `is_default = true`; the server keeps
/// that invariant when a preset is updated with `is_default = true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSetting {
    pub id: EntityId,
    pub preset_name: String,
    pub label_width: f64,
    pub label_height: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub show_price: bool,
    pub show_ingredients: bool,
    pub show_expiry_date: bool,
    pub show_store_name: bool,
    pub show_logo: bool,
    #[serde(default)]
    pub logo_path: Option<String>,
    pub is_default: bool,
    #[serde(default)]
    pub labels_per_sheet: Option<i64>,
}

impl LabelSetting {
    /// Labels per A4 sheet: the server value when reported, otherwise the same
    /// estimate the server uses.
    pub fn labels_per_sheet(&self) -> i64 {
        self.labels_per_sheet
            .unwrap_or_else(|| LabelSettingDto::from(self).labels_per_sheet())
    }

    /// Payload that marks this preset as the default, all other fields unchanged.
    pub fn as_default_payload(&self) -> LabelSettingDto {
        LabelSettingDto {
            is_default: true,
            ..LabelSettingDto::from(self)
        }
    }
}

impl AggregateRoot for LabelSetting {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.preset_name
    }

    fn collection_path() -> &'static str {
        "/api/labels/settings"
    }
}

/// Full preset fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSettingDto {
    pub preset_name: String,
    pub label_width: f64,
    pub label_height: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub show_price: bool,
    pub show_ingredients: bool,
    pub show_expiry_date: bool,
    pub show_store_name: bool,
    pub show_logo: bool,
    pub logo_path: Option<String>,
    pub is_default: bool,
}

impl Default for LabelSettingDto {
    fn default() -> Self {
        Self {
            preset_name: String::new(),
            label_width: 50.0,
            label_height: 30.0,
            margin_top: 10.0,
            margin_bottom: 10.0,
            margin_left: 10.0,
            margin_right: 10.0,
            show_price: true,
            show_ingredients: true,
            show_expiry_date: false,
            show_store_name: true,
            show_logo: false,
            logo_path: None,
            is_default: false,
        }
    }
}

impl LabelSettingDto {
    pub fn labels_per_sheet(&self) -> i64 {
        let (per_row, per_column) = self.grid();
        per_row * per_column
    }

    /// (labels per row, labels per column) on one A4 sheet
    pub fn grid(&self) -> (i64, i64) {
        let printable_width = SHEET_WIDTH_MM - self.margin_left - self.margin_right;
        let printable_height = SHEET_HEIGHT_MM - self.margin_top - self.margin_bottom;
        (
            fit_count(printable_width, self.label_width),
            fit_count(printable_height, self.label_height),
        )
    }
}

fn fit_count(available: f64, size: f64) -> i64 {
    if size <= 0.0 || available <= 0.0 {
        return 0;
    }
    (available / size).floor() as i64
}

impl From<&LabelSetting> for LabelSettingDto {
    fn from(s: &LabelSetting) -> Self {
        Self {
            preset_name: s.preset_name.clone(),
            label_width: s.label_width,
            label_height: s.label_height,
            margin_top: s.margin_top,
            margin_bottom: s.margin_bottom,
            margin_left: s.margin_left,
            margin_right: s.margin_right,
            show_price: s.show_price,
            show_ingredients: s.show_ingredients,
            show_expiry_date: s.show_expiry_date,
            show_store_name: s.show_store_name,
            show_logo: s.show_logo,
            logo_path: s.logo_path.clone(),
            is_default: s.is_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn preset(id: EntityId, is_default: bool) -> LabelSetting {
        LabelSetting {
            id,
            preset_name: format!("preset {id}"),
            label_width: 50.0,
            label_height: 30.0,
            margin_top: 10.0,
            margin_bottom: 10.0,
            margin_left: 10.0,
            margin_right: 10.0,
            show_price: true,
            show_ingredients: false,
            show_expiry_date: true,
            show_store_name: true,
            show_logo: false,
            logo_path: None,
            is_default,
            labels_per_sheet: None,
        }
    }

    #[test]
    fn test_default_payload_only_flips_flag() {
        let current = preset(5, false);
        let payload = current.as_default_payload();
        assert!(payload.is_default);
        assert_eq!(payload.preset_name, "preset 5");
        assert!(!payload.show_ingredients);
        assert!(payload.show_expiry_date);
        assert_eq!(LabelSetting::item_path(5), "/api/labels/settings/5");
    }

    #[test]
    fn test_labels_per_sheet_a4() {
        // (210 - 20) / 50 = 3 per row, (297 - 20) / 30 = 9 per column
        let s = preset(1, true);
        assert_eq!(LabelSettingDto::from(&s).grid(), (3, 9));
        assert_eq!(s.labels_per_sheet(), 27);
    }

    #[test]
    fn test_server_reported_labels_per_sheet_wins() {
        let mut s = preset(1, true);
        s.labels_per_sheet = Some(24);
        assert_eq!(s.labels_per_sheet(), 24);
    }

    #[test]
    fn test_degenerate_sizes() {
        let dto = LabelSettingDto {
            label_width: 0.0,
            ..LabelSettingDto::default()
        };
        assert_eq!(dto.labels_per_sheet(), 0);
        let dto = LabelSettingDto {
            margin_left: 150.0,
            margin_right: 100.0,
            ..LabelSettingDto::default()
        };
        assert_eq!(dto.labels_per_sheet(), 0);
    }

    #[test]
    fn test_new_preset_defaults() {
        let dto = LabelSettingDto::default();
        assert_eq!((dto.label_width, dto.label_height), (50.0, 30.0));
        assert!(dto.show_price && dto.show_ingredients && dto.show_store_name);
        assert!(!dto.show_expiry_date && !dto.is_default);
    }

    #[test]
    fn test_deserialize_server_record() {
        let s: LabelSetting = serde_json::from_value(json!({
            "id": 2, "user_id": 1, "preset_name": "標準ラベル",
            "label_width": 60.0, "label_height": 40.0,
            "margin_top": 5.0, "margin_bottom": 5.0, "margin_left": 5.0, "margin_right": 5.0,
            "show_price": true, "show_ingredients": true, "show_expiry_date": false,
            "show_store_name": true, "show_logo": false, "logo_path": null,
            "is_default": true, "labels_per_sheet": 21,
            "created_at": "2025-02-01T10:00:00", "updated_at": "2025-02-01T10:00:00"
        }))
        .unwrap();
        assert!(s.is_default);
        assert_eq!(s.labels_per_sheet(), 21);
    }
}
