use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityId};

/// One material line inside a recipe, as the server reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMaterial {
    pub id: EntityId,
    pub material_id: EntityId,
    pub quantity: f64,
    #[serde(default)]
    pub material_name: Option<String>,
    #[serde(default)]
    pub material_unit: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Sum of the material line costs, computed server-side
    pub material_cost: f64,
    #[serde(default)]
    pub materials: Vec<RecipeMaterial>,
}

impl AggregateRoot for Recipe {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn collection_path() -> &'static str {
        "/api/recipes/"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMaterialDto {
    pub material_id: EntityId,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecipeDto {
    pub name: String,
    pub description: Option<String>,
    pub materials: Vec<RecipeMaterialDto>,
}

impl From<&Recipe> for RecipeDto {
    fn from(r: &Recipe) -> Self {
        Self {
            name: r.name.clone(),
            description: r.description.clone(),
            materials: r
                .materials
                .iter()
                .map(|m| RecipeMaterialDto {
                    material_id: m.material_id,
                    quantity: m.quantity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_description_is_sent_as_null() {
        let dto = RecipeDto {
            name: "食パン".into(),
            description: None,
            materials: vec![RecipeMaterialDto {
                material_id: 2,
                quantity: 250.0,
            }],
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "name": "食パン",
                "description": null,
                "materials": [{"material_id": 2, "quantity": 250.0}]
            })
        );
    }

    #[test]
    fn test_dto_from_recipe_keeps_lines() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": 3,
            "name": "クロワッサン",
            "material_cost": 120.5,
            "materials": [
                {"id": 10, "material_id": 1, "quantity": 100.0, "material_name": "強力粉", "material_unit": "g", "cost": 50.0},
                {"id": 11, "material_id": 4, "quantity": 30.0}
            ]
        }))
        .unwrap();
        let dto = RecipeDto::from(&recipe);
        assert_eq!(dto.materials.len(), 2);
        assert_eq!(dto.materials[1].material_id, 4);
        assert_eq!(dto.description, None);
    }
}
