use super::view_model::RecipeDetailsViewModel;
use contracts::domain::a002_recipe::aggregate::Recipe;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::FormActions;
use crate::shared::message::use_messages;
use crate::shared::number_format::format_yen_precise;

#[component]
pub fn RecipeDetails(
    recipe: Option<Recipe>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let messages = use_messages();
    let vm = RecipeDetailsViewModel::new(recipe.as_ref());
    let name = vm.name;

    // (value, label) pairs for every row's select
    let material_options = Memo::new(move |_| {
        ctx.materials.with(|c| {
            c.items()
                .iter()
                .map(|m| {
                    (
                        m.id.to_string(),
                        format!("{} ({}/{})", m.name, format_yen_precise(m.unit_price), m.unit),
                    )
                })
                .collect::<Vec<_>>()
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(messages, on_saved);
    };

    view! {
        <h3>{if vm.is_edit_mode() { "レシピを編集" } else { "新規レシピ追加" }}</h3>
        <form id="recipe-form" on:submit=on_submit>
            <div class="form-group">
                <label>"レシピ名 *"</label>
                <input type="text" bind:value=name required />
            </div>
            <div class="form-group">
                <label>"説明"</label>
                <textarea
                    rows="2"
                    prop:value=move || vm.description.get()
                    on:input=move |ev| vm.description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-group">
                <label>"使用材料"</label>
                <div id="recipe-materials-list">
                    <For
                        each=move || vm.rows.get()
                        key=|row| row.key
                        children=move |row| {
                            let key = row.key;
                            let quantity = row.quantity;
                            let current_material = move || {
                                vm.rows.with_untracked(|rows| {
                                    rows.iter()
                                        .find(|r| r.key == key)
                                        .map(|r| r.material_id.clone())
                                        .unwrap_or_default()
                                })
                            };
                            view! {
                                <div class="material-row">
                                    <select
                                        class="recipe-material-id"
                                        required
                                        on:change=move |ev| vm.set_material(key, event_target_value(&ev))
                                    >
                                        <option value="">"材料を選択"</option>
                                        {move || {
                                            let current = current_material();
                                            material_options.get().into_iter().map(|(value, label)| {
                                                let selected = value == current;
                                                view! { <option value=value selected=selected>{label}</option> }
                                            }).collect_view()
                                        }}
                                    </select>
                                    <input
                                        type="number"
                                        class="recipe-material-quantity"
                                        placeholder="使用量"
                                        step="0.01"
                                        required
                                        prop:value=quantity
                                        on:input=move |ev| vm.set_quantity(key, event_target_value(&ev))
                                    />
                                    <button type="button" class="btn btn-danger" on:click=move |_| vm.remove_row(key)>
                                        "削除"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
                <button type="button" class="btn btn-secondary" on:click=move |_| vm.add_row()>
                    "材料を追加"
                </button>
            </div>
            <FormActions on_cancel=on_cancel />
        </form>
    }
}
