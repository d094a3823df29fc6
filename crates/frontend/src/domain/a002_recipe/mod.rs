pub mod api;
pub mod ui;

use crate::domain::a001_material;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::section::SectionLoad;

pub async fn refresh(ctx: AppGlobalContext, load: Option<SectionLoad>) {
    let result = api::fetch_recipes().await;
    if !ctx.accepts(load) {
        return;
    }
    match result {
        Ok(items) => ctx.recipes.update(|cache| cache.replace(items)),
        Err(e) => {
            log::error!("recipes: {}", e);
            ctx.messages.error("レシピデータの取得に失敗しました");
        }
    }
}

/// The recipe form picks from the materials cache; fetch it once when empty.
/// Returns whether at least one material is available.
pub async fn ensure_materials(ctx: AppGlobalContext) -> bool {
    if ctx.materials.with_untracked(|c| c.is_empty()) {
        a001_material::refresh(ctx, None).await;
    }
    ctx.materials.with_untracked(|c| !c.is_empty())
}
