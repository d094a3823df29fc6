use contracts::domain::a005_label_setting::aggregate::LabelSettingDto;

use crate::shared::number_format::parse_number;

/// Editable preset fields; sizes are kept as typed until save.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSettingForm {
    pub preset_name: String,
    pub label_width: String,
    pub label_height: String,
    pub margin_top: String,
    pub margin_bottom: String,
    pub margin_left: String,
    pub margin_right: String,
    pub show_price: bool,
    pub show_ingredients: bool,
    pub show_expiry_date: bool,
    pub show_store_name: bool,
    pub is_default: bool,
    // Not editable here, carried through unchanged.
    show_logo: bool,
    logo_path: Option<String>,
}

impl From<&LabelSettingDto> for LabelSettingForm {
    fn from(dto: &LabelSettingDto) -> Self {
        Self {
            preset_name: dto.preset_name.clone(),
            label_width: dto.label_width.to_string(),
            label_height: dto.label_height.to_string(),
            margin_top: dto.margin_top.to_string(),
            margin_bottom: dto.margin_bottom.to_string(),
            margin_left: dto.margin_left.to_string(),
            margin_right: dto.margin_right.to_string(),
            show_price: dto.show_price,
            show_ingredients: dto.show_ingredients,
            show_expiry_date: dto.show_expiry_date,
            show_store_name: dto.show_store_name,
            is_default: dto.is_default,
            show_logo: dto.show_logo,
            logo_path: dto.logo_path.clone(),
        }
    }
}

impl Default for LabelSettingForm {
    fn default() -> Self {
        Self::from(&LabelSettingDto::default())
    }
}

impl LabelSettingForm {
    pub fn to_dto(&self) -> Result<LabelSettingDto, String> {
        let number = |raw: &str, label: &str| {
            parse_number(raw).ok_or_else(|| format!("{}には数値を入力してください", label))
        };
        let label_width = number(&self.label_width, "幅")?;
        let label_height = number(&self.label_height, "高さ")?;
        if label_width <= 0.0 || label_height <= 0.0 {
            return Err("ラベルサイズは0より大きい値を入力してください".to_string());
        }

        Ok(LabelSettingDto {
            preset_name: self.preset_name.clone(),
            label_width,
            label_height,
            margin_top: number(&self.margin_top, "上余白")?,
            margin_bottom: number(&self.margin_bottom, "下余白")?,
            margin_left: number(&self.margin_left, "左余白")?,
            margin_right: number(&self.margin_right, "右余白")?,
            show_price: self.show_price,
            show_ingredients: self.show_ingredients,
            show_expiry_date: self.show_expiry_date,
            show_store_name: self.show_store_name,
            show_logo: self.show_logo,
            logo_path: self.logo_path.clone(),
            is_default: self.is_default,
        })
    }

    /// Live estimate shown under the size inputs; `None` while a field is invalid.
    pub fn labels_per_sheet(&self) -> Option<i64> {
        self.to_dto().ok().map(|dto| dto.labels_per_sheet())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preset_defaults() {
        let form = LabelSettingForm::default();
        assert_eq!(form.label_width, "50");
        assert_eq!(form.margin_left, "10");
        assert!(form.show_price && form.show_ingredients && form.show_store_name);
        assert!(!form.show_expiry_date && !form.is_default);
        assert_eq!(form.labels_per_sheet(), Some(27));
    }

    #[test]
    fn test_round_trip_keeps_logo_fields() {
        let dto = LabelSettingDto {
            preset_name: "小ラベル".into(),
            label_width: 40.0,
            label_height: 25.5,
            show_logo: true,
            logo_path: Some("/static/logo.png".into()),
            ..LabelSettingDto::default()
        };
        let form = LabelSettingForm::from(&dto);
        assert_eq!(form.label_height, "25.5");
        assert_eq!(form.to_dto(), Ok(dto));
    }

    #[test]
    fn test_invalid_sizes() {
        let mut form = LabelSettingForm::default();
        form.margin_top = "".into();
        assert_eq!(
            form.to_dto(),
            Err("上余白には数値を入力してください".to_string())
        );
        assert_eq!(form.labels_per_sheet(), None);

        let mut form = LabelSettingForm::default();
        form.label_width = "0".into();
        assert!(form.to_dto().is_err());
    }
}
