pub mod api;
pub mod ui;

use crate::domain::a002_recipe;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::section::SectionLoad;

pub async fn refresh(ctx: AppGlobalContext, load: Option<SectionLoad>) {
    let result = api::fetch_products().await;
    if !ctx.accepts(load) {
        return;
    }
    match result {
        Ok(items) => ctx.products.update(|cache| cache.replace(items)),
        Err(e) => {
            log::error!("products: {}", e);
            ctx.messages.error("商品データの取得に失敗しました");
        }
    }
}

/// The product form offers the cached recipes; fetch them once when empty.
pub async fn ensure_recipes(ctx: AppGlobalContext) -> bool {
    if ctx.recipes.with_untracked(|c| c.is_empty()) {
        a002_recipe::refresh(ctx, None).await;
    }
    ctx.recipes.with_untracked(|c| !c.is_empty())
}
