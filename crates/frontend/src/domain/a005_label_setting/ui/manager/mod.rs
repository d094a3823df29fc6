use contracts::domain::a005_label_setting::aggregate::LabelSetting;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_label_setting::{api, refresh, ui::details::LabelSettingDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{DataCard, EmptyState};
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_quantity;

pub const MANAGER_MODAL_STYLE: &str = "max-width: 800px;";

fn check(on: bool) -> &'static str {
    if on {
        "✓"
    } else {
        "✗"
    }
}

fn margins_line(s: &LabelSetting) -> String {
    format!(
        "上{} 下{} 左{} 右{} mm",
        format_quantity(s.margin_top),
        format_quantity(s.margin_bottom),
        format_quantity(s.margin_left),
        format_quantity(s.margin_right),
    )
}

/// Preset list with create/edit/delete and "make default".
///
/// Lives in its own overlay; the preset form opens above it and closes back
/// to it.
#[component]
pub fn LabelSettingsManager() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    spawn_local(refresh(ctx));

    let open_details_modal = move |setting: Option<LabelSetting>| {
        modal_stack.push(move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                spawn_local(refresh(ctx));
            });
            // Only the form closes; the manager below stays open.
            let on_cancel = Callback::new(move |_| handle.close());

            view! {
                <LabelSettingDetails setting=setting.clone() on_saved=on_saved on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    let handle_edit = move |id: EntityId| {
        if let Some(setting) = ctx.label_settings.with_untracked(|c| c.find(id).cloned()) {
            open_details_modal(Some(setting));
        }
    };

    let handle_set_default = move |id: EntityId| {
        let Some(setting) = ctx.label_settings.with_untracked(|c| c.find(id).cloned()) else {
            return;
        };
        spawn_local(async move {
            match api::set_default(&setting).await {
                Ok(_) => {
                    ctx.messages.success("デフォルト設定を更新しました");
                    // Show the flags exactly as the server now reports them.
                    refresh(ctx).await;
                }
                Err(e) => ctx.messages.error(e.user_message("更新に失敗しました")),
            }
        });
    };

    let handle_delete = move |id: EntityId| {
        if !confirm("このラベル設定を削除してもよろしいですか?") {
            return;
        }
        spawn_local(async move {
            match api::delete_label_setting(id).await {
                Ok(()) => {
                    ctx.messages.success("ラベル設定を削除しました");
                    refresh(ctx).await;
                }
                Err(e) => ctx.messages.error(e.user_message("削除に失敗しました")),
            }
        });
    };

    view! {
        <h3>"ラベル設定管理"</h3>
        <button class="btn btn-primary" on:click=move |_| open_details_modal(None)>
            {icon("plus")}
            "新規プリセット追加"
        </button>

        <div id="label-settings-list" class="data-list">
            {move || {
                let items = ctx.label_settings.with(|c| c.items().to_vec());
                if items.is_empty() {
                    return view! { <EmptyState text="ラベル設定がまだ登録されていません。" /> }.into_any();
                }
                items.into_iter().map(|s| {
                    let id = s.id;
                    let is_default = s.is_default;
                    let badge = is_default.then(|| "デフォルト".to_string());
                    view! {
                        <DataCard
                            title=s.preset_name.clone()
                            badge=badge
                            actions=move || view! {
                                {(!is_default).then(|| view! {
                                    <button class="btn btn-secondary" on:click=move |_| handle_set_default(id)>
                                        "デフォルトに設定"
                                    </button>
                                })}
                                <button class="btn btn-secondary" on:click=move |_| handle_edit(id)>"編集"</button>
                                <button class="btn btn-danger" on:click=move |_| handle_delete(id)>"削除"</button>
                            }
                        >
                            <div class="label-setting-grid">
                                <div>
                                    <p>
                                        <strong>"ラベルサイズ: "</strong>
                                        {format!("{} × {} mm", format_quantity(s.label_width), format_quantity(s.label_height))}
                                    </p>
                                    <p><strong>"余白: "</strong>{margins_line(&s)}</p>
                                    <p><strong>"1シートあたり: "</strong>{format!("約{}枚", s.labels_per_sheet())}</p>
                                </div>
                                <div>
                                    <p><strong>"表示オプション:"</strong></p>
                                    <ul>
                                        <li>{check(s.show_price)} " 価格"</li>
                                        <li>{check(s.show_ingredients)} " 原材料"</li>
                                        <li>{check(s.show_expiry_date)} " 賞味期限"</li>
                                        <li>{check(s.show_store_name)} " 店舗名"</li>
                                    </ul>
                                </div>
                            </div>
                        </DataCard>
                    }
                }).collect_view().into_any()
            }}
        </div>

        <div class="form-actions">
            // Closes every overlay, including anything stacked above.
            <button type="button" class="btn btn-secondary" on:click=move |_| modal_stack.clear_deferred()>
                "閉じる"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_line() {
        let setting = LabelSetting {
            id: 2,
            preset_name: "標準".into(),
            label_width: 50.0,
            label_height: 30.0,
            margin_top: 10.0,
            margin_bottom: 12.5,
            margin_left: 8.0,
            margin_right: 8.0,
            show_price: true,
            show_ingredients: true,
            show_expiry_date: false,
            show_store_name: true,
            show_logo: false,
            logo_path: None,
            is_default: true,
            labels_per_sheet: None,
        };
        assert_eq!(margins_line(&setting), "上10 下12.5 左8 右8 mm");
        assert_eq!(setting.labels_per_sheet(), 3 * 9);
    }
}
