use contracts::domain::a003_fixed_cost::aggregate::{FixedCost, FixedCostDto, FixedCostTotal, TOTAL_PATH};
use contracts::domain::common::EntityId;

use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_fixed_costs() -> Result<Vec<FixedCost>, ApiError> {
    api_utils::fetch_all::<FixedCost>().await
}

/// Sum of the active fixed costs, computed server-side.
pub async fn fetch_total() -> Result<FixedCostTotal, ApiError> {
    api_utils::get_json(TOTAL_PATH).await
}

pub async fn save_fixed_cost(id: Option<EntityId>, dto: &FixedCostDto) -> Result<FixedCost, ApiError> {
    match id {
        Some(id) => api_utils::update::<FixedCost, _>(id, dto).await,
        None => api_utils::create::<FixedCost, _>(dto).await,
    }
}

pub async fn delete_fixed_cost(id: EntityId) -> Result<(), ApiError> {
    api_utils::remove::<FixedCost>(id).await
}
