use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityId};

/// Product with its server-computed pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub recipe_id: Option<EntityId>,
    pub include_fixed_cost: bool,
    pub profit_margin: f64,
    #[serde(default)]
    pub selling_price: Option<f64>,
    pub fixed_cost_per_unit: f64,
    pub material_cost: f64,
    pub total_cost: f64,
    pub suggested_price: f64,
    pub actual_profit_margin: f64,
    pub actual_profit_amount: f64,
}

impl AggregateRoot for Product {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn collection_path() -> &'static str {
        "/api/products/"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub recipe_id: Option<EntityId>,
    pub include_fixed_cost: bool,
    pub profit_margin: f64,
    pub selling_price: Option<f64>,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            recipe_id: None,
            include_fixed_cost: false,
            profit_margin: 30.0,
            selling_price: None,
        }
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            recipe_id: p.recipe_id,
            include_fixed_cost: p.include_fixed_cost,
            profit_margin: p.profit_margin,
            selling_price: p.selling_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_margin() {
        assert_eq!(ProductDto::default().profit_margin, 30.0);
    }

    #[test]
    fn test_optional_fields_serialize_as_null() {
        let dto = ProductDto {
            name: "あんパン".into(),
            ..ProductDto::default()
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "name": "あんパン",
                "recipe_id": null,
                "include_fixed_cost": false,
                "profit_margin": 30.0,
                "selling_price": null
            })
        );
    }
}
