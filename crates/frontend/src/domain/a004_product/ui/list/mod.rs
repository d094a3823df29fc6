use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_product::{api, ensure_recipes, refresh, ui::details::ProductDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{DataCard, EmptyState, PageHeader};
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::{
    format_number_with_decimals, format_quantity, format_yen, format_yen_ceil, format_yen_precise,
};

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details_modal = move |product: Option<Product>| {
        spawn_local(async move {
            if !ensure_recipes(ctx).await {
                ctx.messages.error("先にレシピを登録してください");
                return;
            }
            modal_stack.push(move |handle| {
                let on_saved = Callback::new(move |_| {
                    handle.close();
                    spawn_local(refresh(ctx, None));
                });
                let on_cancel = Callback::new(move |_| handle.close());

                view! {
                    <ProductDetails product=product.clone() on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            });
        });
    };

    let handle_edit = move |id: EntityId| {
        if let Some(product) = ctx.products.with_untracked(|c| c.find(id).cloned()) {
            open_details_modal(Some(product));
        }
    };

    let handle_delete = move |id: EntityId| {
        if !confirm("この商品を削除してもよろしいですか?") {
            return;
        }
        spawn_local(async move {
            match api::delete_product(id).await {
                Ok(()) => {
                    ctx.messages.success("商品を削除しました");
                    refresh(ctx, None).await;
                }
                Err(e) => ctx.messages.error(e.user_message("削除に失敗しました")),
            }
        });
    };

    view! {
        <div id="products-section">
            <PageHeader title="商品管理">
                <button class="btn btn-primary" on:click=move |_| open_details_modal(None)>
                    {icon("plus")}
                    "新規商品追加"
                </button>
            </PageHeader>

            <div id="products-list" class="data-list">
                {move || {
                    let items = ctx.products.with(|c| c.items().to_vec());
                    if items.is_empty() {
                        return view! { <EmptyState text="商品がまだ登録されていません。" /> }.into_any();
                    }
                    items.into_iter().map(|p| {
                        let id = p.id;
                        view! {
                            <DataCard
                                title=p.name.clone()
                                actions=move || view! {
                                    <button class="btn btn-secondary" on:click=move |_| handle_edit(id)>"編集"</button>
                                    <button class="btn btn-danger" on:click=move |_| handle_delete(id)>"削除"</button>
                                }
                            >
                                <p>"材料費: " {format_yen_precise(p.material_cost)}</p>
                                <p>
                                    "固定費/個: " {format_yen_precise(p.fixed_cost_per_unit)}
                                    {if p.include_fixed_cost { " (含む)" } else { " (含まない)" }}
                                </p>
                                <p><strong>"総原価: " {format_yen_precise(p.total_cost)}</strong></p>
                                <p>"利益率: " {format_quantity(p.profit_margin)} "%"</p>
                                <p>"推奨販売価格: " {format_yen_ceil(p.suggested_price)}</p>
                                {p.selling_price.map(|price| view! {
                                    <p><strong>"実際の販売価格: " {format_yen(price)}</strong></p>
                                    <p>
                                        "実際の利益: " {format_yen_precise(p.actual_profit_amount)}
                                        " (" {format_number_with_decimals(p.actual_profit_margin, 1)} "%)"
                                    </p>
                                })}
                            </DataCard>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}
