use contracts::domain::a003_fixed_cost::aggregate::FixedCost;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_fixed_cost::{api, refresh, ui::details::FixedCostDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{DataCard, EmptyState, PageHeader};
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_yen;

#[component]
#[allow(non_snake_case)]
pub fn FixedCostList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details_modal = move |fixed_cost: Option<FixedCost>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                spawn_local(refresh(ctx, None));
            });
            let on_cancel = Callback::new(move |_| handle.close());

            view! {
                <FixedCostDetails fixed_cost=fixed_cost.clone() on_saved=on_saved on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    let handle_edit = move |id: EntityId| {
        if let Some(cost) = ctx.fixed_costs.with_untracked(|c| c.find(id).cloned()) {
            open_details_modal(Some(cost));
        }
    };

    let handle_delete = move |id: EntityId| {
        if !confirm("この固定費を削除してもよろしいですか?") {
            return;
        }
        spawn_local(async move {
            match api::delete_fixed_cost(id).await {
                Ok(()) => {
                    ctx.messages.success("固定費を削除しました");
                    refresh(ctx, None).await;
                }
                Err(e) => ctx.messages.error(e.user_message("削除に失敗しました")),
            }
        });
    };

    view! {
        <div id="fixed-costs-section">
            <PageHeader title="固定費管理">
                <button class="btn btn-primary" on:click=move |_| open_details_modal(None)>
                    {icon("plus")}
                    "固定費項目を追加"
                </button>
            </PageHeader>

            <div id="fixed-costs-summary" class="summary-card">
                <h3>"月次固定費合計"</h3>
                <p>{move || format_yen(ctx.fixed_cost_total.get())}</p>
            </div>

            <div id="fixed-costs-list" class="data-list">
                {move || {
                    let items = ctx.fixed_costs.with(|c| c.items().to_vec());
                    if items.is_empty() {
                        return view! { <EmptyState text="固定費がまだ登録されていません。" /> }.into_any();
                    }
                    items.into_iter().map(|c| {
                        let id = c.id;
                        let badge = (!c.is_active).then(|| "(無効)".to_string());
                        view! {
                            <DataCard
                                title=c.name.clone()
                                badge=badge
                                actions=move || view! {
                                    <button class="btn btn-secondary" on:click=move |_| handle_edit(id)>"編集"</button>
                                    <button class="btn btn-danger" on:click=move |_| handle_delete(id)>"削除"</button>
                                }
                            >
                                <p>"月額: " {format_yen(c.monthly_amount)}</p>
                                <p>"状態: " {if c.is_active { "有効（計算に含む）" } else { "無効" }}</p>
                            </DataCard>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}
