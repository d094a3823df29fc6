pub mod api;
pub mod ui;

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::section::SectionLoad;

/// List and monthly total are one load: nothing is replaced unless both arrive.
pub async fn refresh(ctx: AppGlobalContext, load: Option<SectionLoad>) {
    let loaded = match api::fetch_fixed_costs().await {
        Ok(items) => api::fetch_total().await.map(|total| (items, total)),
        Err(e) => Err(e),
    };
    if !ctx.accepts(load) {
        return;
    }
    match loaded {
        Ok((items, total)) => {
            ctx.fixed_costs.update(|cache| cache.replace(items));
            ctx.fixed_cost_total.set(total.total_monthly_fixed_cost);
        }
        Err(e) => {
            log::error!("fixed costs: {}", e);
            ctx.messages.error("固定費データの取得に失敗しました");
        }
    }
}
