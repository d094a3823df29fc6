//! Label printing: product selection, print dialog, PDF download.

pub mod api;
pub mod dialog;
pub mod selection;
pub mod view;
pub mod workflow;

pub use view::LabelsSection;

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::section::SectionLoad;

/// Reload the products offered for printing and drop selected ids that no
/// longer exist.
pub async fn refresh(ctx: AppGlobalContext, load: Option<SectionLoad>) {
    let result = api::fetch_products().await;
    if !ctx.accepts(load) {
        return;
    }
    match result {
        Ok(items) => {
            ctx.products.update(|cache| cache.replace(items));
            let ids = ctx.products.with_untracked(|cache| cache.ids());
            let dropped = ctx
                .print
                .try_update(|wf| wf.retain_existing(&ids))
                .unwrap_or_default();
            if dropped > 0 {
                log::debug!("labels: dropped {} deleted products from the selection", dropped);
            }
        }
        Err(e) => {
            log::error!("label products: {}", e);
            ctx.messages.error("商品データの取得に失敗しました");
        }
    }
}
