use contracts::domain::a005_label_setting::aggregate::{LabelSetting, LabelSettingDto, DEFAULT_PATH};
use contracts::domain::common::EntityId;

use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_label_settings() -> Result<Vec<LabelSetting>, ApiError> {
    api_utils::fetch_all::<LabelSetting>().await
}

/// The account's default preset; a 404 means there is none yet.
pub async fn fetch_default() -> Result<Option<LabelSetting>, ApiError> {
    match api_utils::get_json::<LabelSetting>(DEFAULT_PATH).await {
        Ok(setting) => Ok(Some(setting)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn save_label_setting(
    id: Option<EntityId>,
    dto: &LabelSettingDto,
) -> Result<LabelSetting, ApiError> {
    match id {
        Some(id) => api_utils::update::<LabelSetting, _>(id, dto).await,
        None => api_utils::create::<LabelSetting, _>(dto).await,
    }
}

/// One PUT with the preset's current fields and `is_default: true`. The server
/// unsets the previous default.
pub async fn set_default(setting: &LabelSetting) -> Result<LabelSetting, ApiError> {
    api_utils::update::<LabelSetting, _>(setting.id, &setting.as_default_payload()).await
}

pub async fn delete_label_setting(id: EntityId) -> Result<(), ApiError> {
    api_utils::remove::<LabelSetting>(id).await
}
