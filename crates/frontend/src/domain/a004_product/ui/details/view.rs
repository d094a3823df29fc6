use contracts::domain::a004_product::aggregate::{Product, ProductDto};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_product::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::FormActions;
use crate::shared::message::use_messages;
use crate::shared::number_format::{format_yen_precise, parse_number, parse_optional_number};

/// `""` in the recipe select means "no recipe".
fn parse_recipe_id(raw: &str) -> Option<EntityId> {
    raw.parse::<EntityId>().ok()
}

#[component]
pub fn ProductDetails(
    product: Option<Product>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let messages = use_messages();
    let id = product.as_ref().map(|p| p.id);
    let initial = product.as_ref().map(ProductDto::from).unwrap_or_default();

    let name = RwSignal::new(initial.name);
    let recipe_id = RwSignal::new(
        initial
            .recipe_id
            .map(|r| r.to_string())
            .unwrap_or_default(),
    );
    let include_fixed_cost = RwSignal::new(initial.include_fixed_cost);
    let profit_margin = RwSignal::new(initial.profit_margin.to_string());
    let selling_price = RwSignal::new(
        initial
            .selling_price
            .map(|p| p.to_string())
            .unwrap_or_default(),
    );

    let recipe_options = Memo::new(move |_| {
        ctx.recipes.with(|c| {
            c.items()
                .iter()
                .map(|r| {
                    (
                        r.id.to_string(),
                        format!("{} ({})", r.name, format_yen_precise(r.material_cost)),
                    )
                })
                .collect::<Vec<_>>()
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(margin) = parse_number(&profit_margin.get_untracked()) else {
            messages.error("利益率には数値を入力してください");
            return;
        };
        let price = match parse_optional_number(&selling_price.get_untracked()) {
            Ok(price) => price,
            Err(e) => {
                messages.error(e);
                return;
            }
        };
        let dto = ProductDto {
            name: name.get_untracked(),
            recipe_id: parse_recipe_id(&recipe_id.get_untracked()),
            include_fixed_cost: include_fixed_cost.get_untracked(),
            profit_margin: margin,
            selling_price: price,
        };

        spawn_local(async move {
            match api::save_product(id, &dto).await {
                Ok(_) => {
                    messages.success(if id.is_some() { "商品を更新しました" } else { "商品を追加しました" });
                    on_saved.try_run(());
                }
                Err(e) => messages.error(e.user_message("保存に失敗しました")),
            }
        });
    };

    view! {
        <h3>{if id.is_some() { "商品を編集" } else { "新規商品追加" }}</h3>
        <form id="product-form" on:submit=on_submit>
            <div class="form-group">
                <label>"商品名 *"</label>
                <input type="text" bind:value=name required />
            </div>
            <div class="form-group">
                <label>"レシピ"</label>
                <select on:change=move |ev| recipe_id.set(event_target_value(&ev))>
                    <option value="">"なし"</option>
                    {move || {
                        let current = recipe_id.get_untracked();
                        recipe_options.get().into_iter().map(|(value, label)| {
                            let selected = value == current;
                            view! { <option value=value selected=selected>{label}</option> }
                        }).collect_view()
                    }}
                </select>
            </div>
            <div class="form-group">
                <label>
                    <input type="checkbox" bind:checked=include_fixed_cost />
                    "固定費を含める"
                </label>
            </div>
            <div class="form-group">
                <label>"利益率 (%) *"</label>
                <input type="number" step="0.1" bind:value=profit_margin required />
            </div>
            <div class="form-group">
                <label>"販売価格 (円) - オプション"</label>
                <input
                    type="number"
                    step="1"
                    placeholder="推奨価格を使用する場合は空欄"
                    bind:value=selling_price
                />
            </div>
            <FormActions on_cancel=on_cancel />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_recipe_option_means_none() {
        assert_eq!(parse_recipe_id(""), None);
        assert_eq!(parse_recipe_id("12"), Some(12));
    }
}
