use contracts::domain::a002_recipe::aggregate::{Recipe, RecipeDto};
use contracts::domain::common::EntityId;

use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_recipes() -> Result<Vec<Recipe>, ApiError> {
    api_utils::fetch_all::<Recipe>().await
}

pub async fn save_recipe(id: Option<EntityId>, dto: &RecipeDto) -> Result<Recipe, ApiError> {
    match id {
        Some(id) => api_utils::update::<Recipe, _>(id, dto).await,
        None => api_utils::create::<Recipe, _>(dto).await,
    }
}

pub async fn delete_recipe(id: EntityId) -> Result<(), ApiError> {
    api_utils::remove::<Recipe>(id).await
}
