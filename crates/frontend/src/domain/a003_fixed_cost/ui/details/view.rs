use contracts::domain::a003_fixed_cost::aggregate::{FixedCost, FixedCostDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_fixed_cost::api;
use crate::shared::components::FormActions;
use crate::shared::message::use_messages;
use crate::shared::number_format::parse_number;

#[component]
pub fn FixedCostDetails(
    fixed_cost: Option<FixedCost>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let messages = use_messages();
    let id = fixed_cost.as_ref().map(|c| c.id);
    // New items start active.
    let initial = fixed_cost.as_ref().map(FixedCostDto::from).unwrap_or_default();

    let name = RwSignal::new(initial.name);
    let amount = RwSignal::new(if id.is_some() { initial.monthly_amount.to_string() } else { String::new() });
    let is_active = RwSignal::new(initial.is_active);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(monthly_amount) = parse_number(&amount.get_untracked()) else {
            messages.error("月額には数値を入力してください");
            return;
        };
        let dto = FixedCostDto {
            name: name.get_untracked(),
            monthly_amount,
            is_active: is_active.get_untracked(),
        };

        spawn_local(async move {
            match api::save_fixed_cost(id, &dto).await {
                Ok(_) => {
                    messages.success(if id.is_some() { "固定費を更新しました" } else { "固定費を追加しました" });
                    on_saved.try_run(());
                }
                Err(e) => messages.error(e.user_message("保存に失敗しました")),
            }
        });
    };

    view! {
        <h3>{if id.is_some() { "固定費を編集" } else { "固定費項目を追加" }}</h3>
        <form id="fixed-cost-form" on:submit=on_submit>
            <div class="form-group">
                <label>"項目名 *"</label>
                <input type="text" placeholder="例: 家賃、光熱費" bind:value=name required />
            </div>
            <div class="form-group">
                <label>"月額 (円) *"</label>
                <input type="number" step="0.01" bind:value=amount required />
            </div>
            <div class="form-group">
                <label>
                    <input type="checkbox" bind:checked=is_active />
                    "有効（原価計算に含める）"
                </label>
            </div>
            <FormActions on_cancel=on_cancel />
        </form>
    }
}
