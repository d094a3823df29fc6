use contracts::domain::a002_recipe::aggregate::{Recipe, RecipeDto, RecipeMaterialDto};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_recipe::api;
use crate::shared::message::MessageService;
use crate::shared::number_format::parse_number;

/// One editable `{material, quantity}` line; values are kept as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialRow {
    pub key: u64,
    pub material_id: String,
    pub quantity: String,
}

/// ViewModel for the recipe details form
#[derive(Clone, Copy)]
pub struct RecipeDetailsViewModel {
    pub id: Option<EntityId>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub rows: RwSignal<Vec<MaterialRow>>,
    next_key: RwSignal<u64>,
}

impl RecipeDetailsViewModel {
    pub fn new(recipe: Option<&Recipe>) -> Self {
        let rows: Vec<MaterialRow> = recipe
            .map(|r| {
                r.materials
                    .iter()
                    .enumerate()
                    .map(|(i, m)| MaterialRow {
                        key: i as u64,
                        material_id: m.material_id.to_string(),
                        quantity: m.quantity.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: recipe.map(|r| r.id),
            name: RwSignal::new(recipe.map(|r| r.name.clone()).unwrap_or_default()),
            description: RwSignal::new(
                recipe
                    .and_then(|r| r.description.clone())
                    .unwrap_or_default(),
            ),
            next_key: RwSignal::new(rows.len() as u64),
            rows: RwSignal::new(rows),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn add_row(&self) {
        let key = self.next_key.get_untracked();
        self.next_key.set(key + 1);
        self.rows.update(|rows| {
            rows.push(MaterialRow {
                key,
                material_id: String::new(),
                quantity: String::new(),
            })
        });
    }

    pub fn remove_row(&self, key: u64) {
        self.rows.update(|rows| rows.retain(|r| r.key != key));
    }

    pub fn set_material(&self, key: u64, material_id: String) {
        self.rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.key == key) {
                row.material_id = material_id;
            }
        });
    }

    pub fn set_quantity(&self, key: u64, quantity: String) {
        self.rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.key == key) {
                row.quantity = quantity;
            }
        });
    }

    pub fn save_command(&self, messages: MessageService, on_saved: Callback<()>) {
        let dto = match build_recipe_dto(
            &self.name.get_untracked(),
            &self.description.get_untracked(),
            &self.rows.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(e) => {
                messages.error(e);
                return;
            }
        };

        let id = self.id;
        spawn_local(async move {
            match api::save_recipe(id, &dto).await {
                Ok(_) => {
                    messages.success(if id.is_some() { "レシピを更新しました" } else { "レシピを追加しました" });
                    on_saved.try_run(());
                }
                Err(e) => messages.error(e.user_message("保存に失敗しました")),
            }
        });
    }
}

/// Form values to the request body. An empty description is sent as `null`.
pub fn build_recipe_dto(
    name: &str,
    description: &str,
    rows: &[MaterialRow],
) -> Result<RecipeDto, String> {
    let materials = rows
        .iter()
        .map(|row| {
            let material_id = row
                .material_id
                .parse::<EntityId>()
                .map_err(|_| "材料を選択してください".to_string())?;
            let quantity =
                parse_number(&row.quantity).ok_or_else(|| "使用量を入力してください".to_string())?;
            Ok(RecipeMaterialDto {
                material_id,
                quantity,
            })
        })
        .collect::<Result<Vec<_>, String>>()?;

    let description = description.trim();
    Ok(RecipeDto {
        name: name.to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        materials,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(key: u64, material_id: &str, quantity: &str) -> MaterialRow {
        MaterialRow {
            key,
            material_id: material_id.into(),
            quantity: quantity.into(),
        }
    }

    #[test]
    fn test_rows_become_material_lines() {
        let dto = build_recipe_dto(
            "ショートケーキ",
            "  ",
            &[row(0, "4", "200"), row(3, "9", "12.5")],
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "name": "ショートケーキ",
                "description": null,
                "materials": [
                    {"material_id": 4, "quantity": 200.0},
                    {"material_id": 9, "quantity": 12.5}
                ]
            })
        );
    }

    #[test]
    fn test_incomplete_rows_are_rejected() {
        assert_eq!(
            build_recipe_dto("x", "", &[row(0, "", "1")]),
            Err("材料を選択してください".to_string())
        );
        assert_eq!(
            build_recipe_dto("x", "", &[row(0, "2", "")]),
            Err("使用量を入力してください".to_string())
        );
    }

    #[test]
    fn test_recipe_without_materials_is_allowed() {
        let dto = build_recipe_dto("水", "ミネラル", &[]).unwrap();
        assert!(dto.materials.is_empty());
        assert_eq!(dto.description.as_deref(), Some("ミネラル"));
    }
}
