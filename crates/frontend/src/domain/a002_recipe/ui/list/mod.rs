use contracts::domain::a002_recipe::aggregate::{Recipe, RecipeMaterial};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_recipe::{api, ensure_materials, refresh, ui::details::RecipeDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{DataCard, EmptyState, PageHeader};
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::{format_quantity, format_yen_precise};

fn material_line(m: &RecipeMaterial) -> String {
    format!(
        "{}: {} {} ({})",
        m.material_name.as_deref().unwrap_or("-"),
        format_quantity(m.quantity),
        m.material_unit.as_deref().unwrap_or(""),
        format_yen_precise(m.cost.unwrap_or_default()),
    )
}

#[component]
#[allow(non_snake_case)]
pub fn RecipeList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details_modal = move |recipe: Option<Recipe>| {
        spawn_local(async move {
            if !ensure_materials(ctx).await {
                ctx.messages.error("先に材料を登録してください");
                return;
            }
            modal_stack.push(move |handle| {
                let on_saved = Callback::new(move |_| {
                    handle.close();
                    spawn_local(refresh(ctx, None));
                });
                let on_cancel = Callback::new(move |_| handle.close());

                view! {
                    <RecipeDetails recipe=recipe.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            });
        });
    };

    let handle_edit = move |id: EntityId| {
        if let Some(recipe) = ctx.recipes.with_untracked(|c| c.find(id).cloned()) {
            open_details_modal(Some(recipe));
        }
    };

    let handle_delete = move |id: EntityId| {
        if !confirm("このレシピを削除してもよろしいですか?") {
            return;
        }
        spawn_local(async move {
            match api::delete_recipe(id).await {
                Ok(()) => {
                    ctx.messages.success("レシピを削除しました");
                    refresh(ctx, None).await;
                }
                Err(e) => ctx.messages.error(e.user_message("削除に失敗しました")),
            }
        });
    };

    view! {
        <div id="recipes-section">
            <PageHeader title="レシピ管理">
                <button class="btn btn-primary" on:click=move |_| open_details_modal(None)>
                    {icon("plus")}
                    "新規レシピ追加"
                </button>
            </PageHeader>

            <div id="recipes-list" class="data-list">
                {move || {
                    let items = ctx.recipes.with(|c| c.items().to_vec());
                    if items.is_empty() {
                        return view! { <EmptyState text="レシピがまだ登録されていません。" /> }.into_any();
                    }
                    items.into_iter().map(|r| {
                        let id = r.id;
                        let lines: Vec<String> = r.materials.iter().map(material_line).collect();
                        view! {
                            <DataCard
                                title=r.name.clone()
                                actions=move || view! {
                                    <button class="btn btn-secondary" on:click=move |_| handle_edit(id)>"編集"</button>
                                    <button class="btn btn-danger" on:click=move |_| handle_delete(id)>"削除"</button>
                                }
                            >
                                {r.description.clone().filter(|d| !d.is_empty()).map(|d| view! { <p>{d}</p> })}
                                <p><strong>"材料費合計: " {format_yen_precise(r.material_cost)}</strong></p>
                                <details>
                                    <summary>"使用材料"</summary>
                                    <div class="recipe-materials">
                                        {if lines.is_empty() {
                                            view! { <span>"材料なし"</span> }.into_any()
                                        } else {
                                            lines.into_iter()
                                                .map(|line| view! { <div>{line}</div> })
                                                .collect_view()
                                                .into_any()
                                        }}
                                    </div>
                                </details>
                            </DataCard>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_line() {
        let line = RecipeMaterial {
            id: 1,
            material_id: 4,
            quantity: 200.0,
            material_name: Some("薄力粉".into()),
            material_unit: Some("g".into()),
            cost: Some(48.0),
        };
        assert_eq!(material_line(&line), "薄力粉: 200 g (¥48.00)");
    }
}
