use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityId};

/// Raw material as returned by `GET /api/materials/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: EntityId,
    pub name: String,
    pub purchase_price: f64,
    pub purchase_quantity: f64,
    pub unit: String,
    /// Computed server-side: purchase_price / purchase_quantity
    pub unit_price: f64,
}

impl AggregateRoot for Material {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn collection_path() -> &'static str {
        "/api/materials/"
    }
}

/// Body of create (POST) and update (PUT) requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MaterialDto {
    pub name: String,
    pub purchase_price: f64,
    pub purchase_quantity: f64,
    pub unit: String,
}

impl From<&Material> for MaterialDto {
    fn from(m: &Material) -> Self {
        Self {
            name: m.name.clone(),
            purchase_price: m.purchase_price,
            purchase_quantity: m.purchase_quantity,
            unit: m.unit.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths() {
        assert_eq!(Material::collection_path(), "/api/materials/");
        assert_eq!(Material::item_path(12), "/api/materials/12");
    }

    #[test]
    fn test_deserialize_ignores_server_fields() {
        let m: Material = serde_json::from_value(json!({
            "id": 1,
            "user_id": 4,
            "name": "強力粉",
            "purchase_price": 500.0,
            "purchase_quantity": 1000.0,
            "unit": "g",
            "unit_price": 0.5,
            "created_at": "2025-01-10T09:00:00",
            "updated_at": "2025-01-10T09:00:00"
        }))
        .unwrap();
        assert_eq!(m.name, "強力粉");
        assert_eq!(MaterialDto::from(&m).unit, "g");
    }
}
