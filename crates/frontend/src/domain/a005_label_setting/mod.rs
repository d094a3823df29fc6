pub mod api;
pub mod ui;

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

pub async fn refresh(ctx: AppGlobalContext) {
    match api::fetch_label_settings().await {
        Ok(items) => ctx.label_settings.update(|cache| cache.replace(items)),
        Err(e) => {
            log::error!("label settings: {}", e);
            ctx.messages.error("ラベル設定の取得に失敗しました");
        }
    }
}
