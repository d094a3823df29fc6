use contracts::domain::a005_label_setting::aggregate::{LabelSetting, LabelSettingDto};
use contracts::domain::common::EntityId;
use contracts::usecases::u501_print_labels::parse_expiry_date;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::domain::a005_label_setting::api as settings_api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::export::{download_bytes, PDF_MIME};
use crate::shared::modal_stack::ModalHandle;
use crate::shared::number_format::format_quantity;

pub fn labels_file_name(epoch_millis: u64) -> String {
    format!("labels_{}.pdf", epoch_millis)
}

/// Preset pre-selected when the dialog opens. Sending no id only works when
/// the account has a default, so without one the first preset is named.
fn initial_choice(presets: &[LabelSetting], default: Option<&LabelSetting>) -> Option<EntityId> {
    match default {
        Some(_) => None,
        None => presets.first().map(|p| p.id),
    }
}

/// Layout the server will use: the chosen preset, else the account default.
///
/// With neither there is nothing to print with; the name is `None` and the
/// built-in values are returned as a preview only.
fn effective_layout(
    presets: &[LabelSetting],
    chosen: Option<EntityId>,
    default: Option<&LabelSetting>,
) -> (Option<String>, LabelSettingDto) {
    let preset = chosen
        .and_then(|id| presets.iter().find(|p| p.id == id))
        .or(default);
    match preset {
        Some(p) => (Some(p.preset_name.clone()), LabelSettingDto::from(p)),
        None => (None, LabelSettingDto::default()),
    }
}

fn flag(on: bool) -> &'static str {
    if on {
        "表示"
    } else {
        "非表示"
    }
}

/// Print configuration dialog.
///
/// Only the preset choice and the expiry date are sent; the layout shown here
/// is read-only and comes from the preset.
#[component]
pub fn PrintDialog(handle: ModalHandle) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let presets = RwSignal::new(Vec::<LabelSetting>::new());
    let default_preset = RwSignal::new(None::<LabelSetting>);
    // None = let the server use the default preset
    let chosen = RwSignal::new(None::<EntityId>);
    let expiry = RwSignal::new(String::new());

    // Closing the overlay by any route (cancel, backdrop, Escape) leaves the dialog state.
    on_cleanup(move || {
        ctx.print.try_update(|wf| wf.cancel());
    });

    // Presets are fetched fresh every time the dialog opens.
    spawn_local(async move {
        let default = settings_api::fetch_default().await.unwrap_or_else(|e| {
            log::error!("default label setting: {}", e);
            None
        });
        let list = settings_api::fetch_label_settings().await.unwrap_or_else(|e| {
            log::error!("label settings: {}", e);
            Vec::new()
        });
        let choice = initial_choice(&list, default.as_ref());
        default_preset.try_set(default);
        presets.try_set(list);
        chosen.try_update(|c| {
            if c.is_none() {
                *c = choice;
            }
        });
    });

    let layout = Memo::new(move |_| {
        presets.with(|list| {
            default_preset.with(|default| effective_layout(list, chosen.get(), default.as_ref()))
        })
    });

    let is_submitting = Signal::derive(move || ctx.print.with(|wf| wf.is_submitting()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let expiry_date = match parse_expiry_date(&expiry.get_untracked()) {
            Ok(date) => date,
            Err(e) => {
                ctx.messages.error(e);
                return;
            }
        };
        let request = match ctx.print.try_update(|wf| wf.submit(expiry_date, chosen.get_untracked())) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                ctx.messages.error(e.to_string());
                return;
            }
            None => return,
        };

        ctx.messages.info("PDFを生成中...");
        spawn_local(async move {
            match api::print_labels(&request).await {
                Ok(bytes) => {
                    let file_name = labels_file_name(js_sys::Date::now() as u64);
                    if let Err(e) = download_bytes(&bytes, PDF_MIME, &file_name) {
                        log::error!("label download: {}", e);
                        ctx.print.try_update(|wf| wf.finish_err());
                        ctx.messages.error("PDF生成に失敗しました");
                        return;
                    }
                    log::info!("printed labels for {} products", request.product_ids.len());
                    ctx.print.try_update(|wf| wf.finish_ok());
                    ctx.messages.success("ラベルPDFをダウンロードしました");
                    // No-op if the overlay was already dismissed.
                    handle.close();
                }
                Err(e) => {
                    log::error!("label print: {}", e);
                    ctx.print.try_update(|wf| wf.finish_err());
                    ctx.messages.error(e.user_message("PDF生成に失敗しました"));
                }
            }
        });
    };

    view! {
        <h3>"ラベル印刷設定"</h3>
        <p>{move || format!("選択中: {}個の商品", ctx.print.with(|wf| wf.selected_count()))}</p>
        <form id="print-form" on:submit=on_submit>
            <div class="form-group">
                <label>"ラベル設定"</label>
                <select on:change=move |ev| {
                    chosen.set(event_target_value(&ev).parse::<EntityId>().ok());
                }>
                    <option value="" selected=move || chosen.get().is_none()>
                        {move || match default_preset.get() {
                            Some(p) => format!("デフォルト ({})", p.preset_name),
                            None => "デフォルト未設定".to_string(),
                        }}
                    </option>
                    {move || presets.get().into_iter().map(|p| {
                        let id = p.id;
                        view! {
                            <option value=id.to_string() selected=move || chosen.get() == Some(id)>
                                {p.preset_name}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <div class="form-group print-layout-summary">
                {move || {
                    let (name, dto) = layout.get();
                    let missing = name.is_none();
                    view! {
                        <p><strong>{name.unwrap_or_else(|| "デフォルト未設定".to_string())}</strong></p>
                        {missing.then(|| view! {
                            <p class="form-hint">
                                "デフォルトのラベル設定がありません。「ラベル設定」からプリセットを作成してください。"
                            </p>
                        })}
                        <p>
                            {format!(
                                "ラベルサイズ: {} × {} mm / 余白: 上{} 下{} 左{} 右{} mm",
                                format_quantity(dto.label_width),
                                format_quantity(dto.label_height),
                                format_quantity(dto.margin_top),
                                format_quantity(dto.margin_bottom),
                                format_quantity(dto.margin_left),
                                format_quantity(dto.margin_right),
                            )}
                        </p>
                        <p>{format!("1シートあたり: 約{}枚", dto.labels_per_sheet())}</p>
                        <p>
                            {format!(
                                "価格: {} / 原材料: {} / 店舗名: {}",
                                flag(dto.show_price),
                                flag(dto.show_ingredients),
                                flag(dto.show_store_name),
                            )}
                        </p>
                    }
                }}
            </div>

            <div class="form-group">
                <label>"賞味期限"</label>
                <input type="date" bind:value=expiry />
            </div>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                    {move || if is_submitting.get() { "生成中..." } else { "PDFを生成" }}
                </button>
                // A pending request has to finish before the dialog can be left this way.
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || is_submitting.get()
                    on:click=move |_| handle.close()
                >
                    "キャンセル"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(id: EntityId, name: &str, width: f64, is_default: bool) -> LabelSetting {
        let dto = LabelSettingDto {
            preset_name: name.into(),
            label_width: width,
            is_default,
            ..LabelSettingDto::default()
        };
        LabelSetting {
            id,
            preset_name: dto.preset_name,
            label_width: dto.label_width,
            label_height: dto.label_height,
            margin_top: dto.margin_top,
            margin_bottom: dto.margin_bottom,
            margin_left: dto.margin_left,
            margin_right: dto.margin_right,
            show_price: dto.show_price,
            show_ingredients: dto.show_ingredients,
            show_expiry_date: dto.show_expiry_date,
            show_store_name: dto.show_store_name,
            show_logo: dto.show_logo,
            logo_path: dto.logo_path,
            is_default: dto.is_default,
            labels_per_sheet: None,
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(labels_file_name(1733011200000), "labels_1733011200000.pdf");
    }

    #[test]
    fn test_effective_layout_precedence() {
        let presets = vec![preset(2, "標準", 50.0, true), preset(5, "小", 40.0, false)];
        let default = presets.first();

        let (name, dto) = effective_layout(&presets, Some(5), default);
        assert_eq!((name.as_deref(), dto.label_width), (Some("小"), 40.0));

        let (name, _) = effective_layout(&presets, None, default);
        assert_eq!(name.as_deref(), Some("標準"));

        // Unknown id falls back to the default preset.
        let (name, _) = effective_layout(&presets, Some(99), default);
        assert_eq!(name.as_deref(), Some("標準"));
    }

    #[test]
    fn test_initial_choice_names_a_preset_without_default() {
        let presets = vec![preset(4, "大", 70.0, false), preset(6, "小", 40.0, false)];
        assert_eq!(initial_choice(&presets, None), Some(4));
        assert_eq!(initial_choice(&presets, presets.get(1)), None);
        assert_eq!(initial_choice(&[], None), None);

        let (name, dto) = effective_layout(&presets, initial_choice(&presets, None), None);
        assert_eq!((name.as_deref(), dto.label_width), (Some("大"), 70.0));
    }

    #[test]
    fn test_builtin_layout_without_presets() {
        let (name, dto) = effective_layout(&[], None, None);
        assert_eq!(name, None);
        assert_eq!((dto.label_width, dto.label_height), (50.0, 30.0));
        assert_eq!(dto.margin_top, 10.0);
        assert!(dto.show_price && dto.show_ingredients);
    }
}
