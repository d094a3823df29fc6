//! TopHeader component - application top bar with the title and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::message::use_messages;
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let messages = use_messages();
    let (_, set_auth_state) = use_auth();

    let logout = move |_| {
        // Overlays belong to the session; none may survive on the auth page.
        modal_stack.clear();
        ctx.reset_router();
        do_logout(set_auth_state);
        messages.info("ログアウトしました");
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"原価計算システム"</span>
            </div>

            <div class="top-header__actions">
                <button id="logout-btn" class="top-header__icon-btn" on:click=logout title="ログアウト">
                    {icon("log-out")}
                    <span>"ログアウト"</span>
                </button>
            </div>
        </div>
    }
}
