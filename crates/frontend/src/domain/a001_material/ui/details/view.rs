use contracts::domain::a001_material::aggregate::{Material, MaterialDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_material::api;
use crate::shared::components::FormActions;
use crate::shared::message::use_messages;
use crate::shared::number_format::parse_number;

/// Create/edit form for one material.
#[component]
pub fn MaterialDetails(
    /// `None` opens an empty form for a new material
    material: Option<Material>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let messages = use_messages();
    let id = material.as_ref().map(|m| m.id);
    let initial = material.as_ref().map(MaterialDto::from).unwrap_or_default();
    let is_edit = id.is_some();

    let name = RwSignal::new(initial.name);
    let price = RwSignal::new(if is_edit { initial.purchase_price.to_string() } else { String::new() });
    let quantity =
        RwSignal::new(if is_edit { initial.purchase_quantity.to_string() } else { String::new() });
    let unit = RwSignal::new(initial.unit);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let (Some(purchase_price), Some(purchase_quantity)) = (
            parse_number(&price.get_untracked()),
            parse_number(&quantity.get_untracked()),
        ) else {
            messages.error("購入金額と購入容量には数値を入力してください");
            return;
        };
        let dto = MaterialDto {
            name: name.get_untracked(),
            purchase_price,
            purchase_quantity,
            unit: unit.get_untracked(),
        };

        spawn_local(async move {
            match api::save_material(id, &dto).await {
                Ok(_) => {
                    messages.success(if id.is_some() { "材料を更新しました" } else { "材料を追加しました" });
                    on_saved.try_run(());
                }
                Err(e) => messages.error(e.user_message("保存に失敗しました")),
            }
        });
    };

    view! {
        <h3>{if is_edit { "材料を編集" } else { "新規材料追加" }}</h3>
        <form id="material-form" on:submit=on_submit>
            <div class="form-group">
                <label>"材料名 *"</label>
                <input type="text" bind:value=name required />
            </div>
            <div class="form-group">
                <label>"購入金額 (円) *"</label>
                <input type="number" step="0.01" bind:value=price required />
            </div>
            <div class="form-group">
                <label>"購入容量 *"</label>
                <input type="number" step="0.01" bind:value=quantity required />
            </div>
            <div class="form-group">
                <label>"単位 *"</label>
                <input type="text" placeholder="例: g, ml, 個" bind:value=unit required />
            </div>
            <FormActions on_cancel=on_cancel />
        </form>
    }
}
