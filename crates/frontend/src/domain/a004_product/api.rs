use contracts::domain::a004_product::aggregate::{Product, ProductDto};
use contracts::domain::common::EntityId;

use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    api_utils::fetch_all::<Product>().await
}

pub async fn save_product(id: Option<EntityId>, dto: &ProductDto) -> Result<Product, ApiError> {
    match id {
        Some(id) => api_utils::update::<Product, _>(id, dto).await,
        None => api_utils::create::<Product, _>(dto).await,
    }
}

pub async fn delete_product(id: EntityId) -> Result<(), ApiError> {
    api_utils::remove::<Product>(id).await
}
