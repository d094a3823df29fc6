use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityId};

/// Monthly fixed cost (rent, utilities, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCost {
    pub id: EntityId,
    pub name: String,
    pub monthly_amount: f64,
    pub is_active: bool,
}

impl AggregateRoot for FixedCost {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn collection_path() -> &'static str {
        "/api/fixed-costs/"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCostDto {
    pub name: String,
    pub monthly_amount: f64,
    pub is_active: bool,
}

impl Default for FixedCostDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            monthly_amount: 0.0,
            is_active: true,
        }
    }
}

impl From<&FixedCost> for FixedCostDto {
    fn from(c: &FixedCost) -> Self {
        Self {
            name: c.name.clone(),
            monthly_amount: c.monthly_amount,
            is_active: c.is_active,
        }
    }
}

/// Response of `GET /api/fixed-costs/total`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FixedCostTotal {
    pub total_monthly_fixed_cost: f64,
}

pub const TOTAL_PATH: &str = "/api/fixed-costs/total";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_fixed_cost_is_active() {
        assert!(FixedCostDto::default().is_active);
    }

    #[test]
    fn test_total_shape() {
        let total: FixedCostTotal =
            serde_json::from_value(json!({"total_monthly_fixed_cost": 185000.0})).unwrap();
        assert_eq!(total.total_monthly_fixed_cost, 185000.0);
        assert_eq!(FixedCost::item_path(7), "/api/fixed-costs/7");
    }
}
