pub mod api;
pub mod ui;

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::section::SectionLoad;

/// Re-fetch the materials list into the cache; on failure the previous list stays.
pub async fn refresh(ctx: AppGlobalContext, load: Option<SectionLoad>) {
    let result = api::fetch_materials().await;
    if !ctx.accepts(load) {
        return;
    }
    match result {
        Ok(items) => ctx.materials.update(|cache| cache.replace(items)),
        Err(e) => {
            log::error!("materials: {}", e);
            ctx.messages.error("材料データの取得に失敗しました");
        }
    }
}
