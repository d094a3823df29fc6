use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

use super::dialog::PrintDialog;
use crate::domain::a005_label_setting::ui::manager::{LabelSettingsManager, MANAGER_MODAL_STYLE};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{EmptyState, PageHeader, SelectCheckbox};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_yen;

fn price_line(product: &Product) -> String {
    match product.selling_price {
        Some(price) => format!("販売価格: {}", format_yen(price)),
        None => "販売価格: 未設定".to_string(),
    }
}

#[component]
fn ProductPickCard(product: Product) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let id: EntityId = product.id;
    let is_selected = Signal::derive(move || ctx.print.with(|wf| wf.is_selected(id)));

    let toggle = move || {
        ctx.print.update(|wf| {
            wf.toggle(id);
        });
    };

    view! {
        <div
            class="data-card selectable"
            class:selected=move || is_selected.get()
            on:click=move |_| toggle()
        >
            <div class="data-card-header">
                <SelectCheckbox checked=is_selected on_change=Callback::new(move |_| toggle()) />
                <div class="data-card-title">{product.name.clone()}</div>
            </div>
            <div class="data-card-body">
                <p>{price_line(&product)}</p>
                <p>{if product.recipe_id.is_some() { "レシピ: あり" } else { "レシピ: なし" }}</p>
            </div>
        </div>
    }
}

/// Product picker for label printing plus entry points to the preset
/// manager and the print dialog.
#[component]
#[allow(non_snake_case)]
pub fn LabelsSection() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_settings = move |_: leptos::ev::MouseEvent| {
        modal_stack.push_with_frame(Some(MANAGER_MODAL_STYLE.to_string()), |_handle| {
            view! { <LabelSettingsManager /> }.into_any()
        });
    };

    let open_print_dialog = move |_: leptos::ev::MouseEvent| {
        match ctx.print.try_update(|wf| wf.begin_print()) {
            Some(Ok(())) => {
                modal_stack.push(|handle| view! { <PrintDialog handle=handle /> }.into_any());
            }
            Some(Err(e)) => ctx.messages.error(e.to_string()),
            None => {}
        }
    };

    let selected_count = move || ctx.print.with(|wf| wf.selected_count());

    view! {
        <div id="labels-section">
            <PageHeader title="ラベル印刷">
                <button class="btn btn-secondary" on:click=open_settings>
                    {icon("settings")}
                    "ラベル設定"
                </button>
                <button class="btn btn-primary" on:click=open_print_dialog>
                    {icon("printer")}
                    "印刷"
                </button>
            </PageHeader>

            <p class="selection-summary">{move || format!("選択中: {}個の商品", selected_count())}</p>

            <div id="labels-product-list" class="data-list">
                {move || {
                    let items = ctx.products.with(|c| c.items().to_vec());
                    if items.is_empty() {
                        return view! {
                            <EmptyState text="商品がまだ登録されていません。先に商品を登録してください。" />
                        }
                        .into_any();
                    }
                    items
                        .into_iter()
                        .map(|p| view! { <ProductPickCard product=p /> })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_line() {
        let mut product = Product {
            id: 1,
            name: "クッキー".into(),
            recipe_id: None,
            include_fixed_cost: false,
            profit_margin: 30.0,
            selling_price: Some(350.0),
            fixed_cost_per_unit: 0.0,
            material_cost: 120.0,
            total_cost: 120.0,
            suggested_price: 156.0,
            actual_profit_margin: 65.7,
            actual_profit_amount: 230.0,
        };
        assert_eq!(price_line(&product), "販売価格: ¥350");
        product.selling_price = None;
        assert_eq!(price_line(&product), "販売価格: 未設定");
    }
}
