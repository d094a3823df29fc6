use contracts::domain::a001_material::aggregate::{Material, MaterialDto};
use contracts::domain::common::EntityId;

use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_materials() -> Result<Vec<Material>, ApiError> {
    api_utils::fetch_all::<Material>().await
}

/// POST for a new material, PUT when `id` is set.
pub async fn save_material(id: Option<EntityId>, dto: &MaterialDto) -> Result<Material, ApiError> {
    match id {
        Some(id) => api_utils::update::<Material, _>(id, dto).await,
        None => api_utils::create::<Material, _>(dto).await,
    }
}

pub async fn delete_material(id: EntityId) -> Result<(), ApiError> {
    api_utils::remove::<Material>(id).await
}
