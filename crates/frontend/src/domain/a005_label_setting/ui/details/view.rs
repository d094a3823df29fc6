use super::view_model::LabelSettingForm;
use contracts::domain::a005_label_setting::aggregate::{LabelSetting, LabelSettingDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_label_setting::api;
use crate::shared::components::FormActions;
use crate::shared::message::use_messages;

type Getter = fn(&LabelSettingForm) -> &String;
type Setter = fn(&mut LabelSettingForm, String);

fn mm_input(
    form: RwSignal<LabelSettingForm>,
    placeholder: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <input
            type="number"
            step="0.1"
            placeholder=placeholder
            required
            prop:value=move || form.with(|f| get(f).clone())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| set(f, value));
            }
        />
    }
}

type FlagGetter = fn(&LabelSettingForm) -> bool;
type FlagSetter = fn(&mut LabelSettingForm, bool);

fn flag_input(
    form: RwSignal<LabelSettingForm>,
    label: &'static str,
    get: FlagGetter,
    set: FlagSetter,
) -> impl IntoView {
    view! {
        <label>
            <input
                type="checkbox"
                prop:checked=move || form.with(get)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    form.update(|f| set(f, checked));
                }
            />
            " "
            {label}
        </label>
    }
}

/// Create/edit form for a label preset, pushed on top of the settings manager.
#[component]
pub fn LabelSettingDetails(
    setting: Option<LabelSetting>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let messages = use_messages();
    let id = setting.as_ref().map(|s| s.id);
    let initial = setting
        .as_ref()
        .map(|s| LabelSettingForm::from(&LabelSettingDto::from(s)))
        .unwrap_or_default();
    let form = RwSignal::new(initial);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = match form.with_untracked(|f| f.to_dto()) {
            Ok(dto) => dto,
            Err(e) => {
                messages.error(e);
                return;
            }
        };

        spawn_local(async move {
            match api::save_label_setting(id, &dto).await {
                Ok(_) => {
                    messages.success(if id.is_some() {
                        "ラベル設定を更新しました"
                    } else {
                        "ラベル設定を追加しました"
                    });
                    on_saved.try_run(());
                }
                Err(e) => messages.error(e.user_message("保存に失敗しました")),
            }
        });
    };

    view! {
        <h3>{if id.is_some() { "ラベル設定を編集" } else { "新規ラベル設定" }}</h3>
        <form id="label-setting-form" on:submit=on_submit>
            <div class="form-group">
                <label>"プリセット名 *"</label>
                <input
                    type="text"
                    placeholder="例: 標準ラベル"
                    required
                    prop:value=move || form.with(|f| f.preset_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.preset_name = value);
                    }
                />
            </div>

            <div class="form-group">
                <label>"ラベルサイズ (mm) *"</label>
                <div class="form-row">
                    {mm_input(form, "幅", |f| &f.label_width, |f, v| f.label_width = v)}
                    {mm_input(form, "高さ", |f| &f.label_height, |f, v| f.label_height = v)}
                </div>
            </div>

            <div class="form-group">
                <label>"余白 (mm) *"</label>
                <div class="form-grid">
                    {mm_input(form, "上", |f| &f.margin_top, |f, v| f.margin_top = v)}
                    {mm_input(form, "下", |f| &f.margin_bottom, |f, v| f.margin_bottom = v)}
                    {mm_input(form, "左", |f| &f.margin_left, |f, v| f.margin_left = v)}
                    {mm_input(form, "右", |f| &f.margin_right, |f, v| f.margin_right = v)}
                </div>
                <small class="form-hint">
                    {move || match form.with(|f| f.labels_per_sheet()) {
                        Some(n) => format!("A4 1シートあたり 約{}枚", n),
                        None => String::new(),
                    }}
                </small>
            </div>

            <div class="form-group">
                <label>"表示オプション"</label>
                <div class="form-grid">
                    {flag_input(form, "価格を表示", |f| f.show_price, |f, v| f.show_price = v)}
                    {flag_input(form, "原材料を表示", |f| f.show_ingredients, |f, v| f.show_ingredients = v)}
                    {flag_input(form, "賞味期限を表示", |f| f.show_expiry_date, |f, v| f.show_expiry_date = v)}
                    {flag_input(form, "店舗名を表示", |f| f.show_store_name, |f, v| f.show_store_name = v)}
                </div>
            </div>

            <div class="form-group">
                {flag_input(form, "デフォルト設定にする", |f| f.is_default, |f, v| f.is_default = v)}
            </div>

            <FormActions on_cancel=on_cancel />
        </form>
    }
}
