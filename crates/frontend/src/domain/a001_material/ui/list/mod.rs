use contracts::domain::a001_material::aggregate::Material;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_material::{api, refresh, ui::details::MaterialDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{DataCard, EmptyState, PageHeader};
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::{format_quantity, format_yen, format_yen_precise};

#[component]
#[allow(non_snake_case)]
pub fn MaterialList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details_modal = move |material: Option<Material>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                spawn_local(refresh(ctx, None));
            });
            let on_cancel = Callback::new(move |_| handle.close());

            view! {
                <MaterialDetails
                    material=material.clone()
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    // Edit forms are filled from the last fetched list.
    let handle_edit = move |id: EntityId| {
        if let Some(material) = ctx.materials.with_untracked(|c| c.find(id).cloned()) {
            open_details_modal(Some(material));
        }
    };

    let handle_delete = move |id: EntityId| {
        if !confirm("この材料を削除してもよろしいですか?") {
            return;
        }
        spawn_local(async move {
            match api::delete_material(id).await {
                Ok(()) => {
                    ctx.messages.success("材料を削除しました");
                    refresh(ctx, None).await;
                }
                Err(e) => ctx.messages.error(e.user_message("削除に失敗しました")),
            }
        });
    };

    view! {
        <div id="materials-section">
            <PageHeader title="材料管理">
                <button class="btn btn-primary" on:click=move |_| open_details_modal(None)>
                    {icon("plus")}
                    "新規材料追加"
                </button>
            </PageHeader>

            <div id="materials-list" class="data-list">
                {move || {
                    let items = ctx.materials.with(|c| c.items().to_vec());
                    if items.is_empty() {
                        return view! { <EmptyState text="材料がまだ登録されていません。" /> }.into_any();
                    }
                    items.into_iter().map(|m| {
                        let id = m.id;
                        view! {
                            <DataCard
                                title=m.name.clone()
                                actions=move || view! {
                                    <button class="btn btn-secondary" on:click=move |_| handle_edit(id)>"編集"</button>
                                    <button class="btn btn-danger" on:click=move |_| handle_delete(id)>"削除"</button>
                                }
                            >
                                <p>"購入価格: " {format_yen(m.purchase_price)}</p>
                                <p>"購入容量: " {format_quantity(m.purchase_quantity)} " " {m.unit.clone()}</p>
                                <p><strong>"単価: " {format_yen_precise(m.unit_price)} " / " {m.unit.clone()}</strong></p>
                            </DataCard>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}
