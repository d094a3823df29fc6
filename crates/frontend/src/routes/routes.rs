use crate::layout::Shell;
use crate::system::auth::context::{use_auth, SessionView};
use crate::system::pages::login::AuthPage;
use leptos::prelude::*;

/// Session gate: the auth page without a stored token, the app otherwise.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.view() == SessionView::App)
            fallback=|| view! { <AuthPage /> }
        >
            <Shell />
        </Show>
    }
}
