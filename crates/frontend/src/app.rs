use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::message::{MessageHost, MessageService};
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let messages = MessageService::new();
    provide_context(messages);

    // Overlays live above both the auth page and the main layout.
    provide_context(ModalStackService::new());

    // Caches, section router and label selection for the whole session.
    provide_context(AppGlobalContext::new(messages));

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
        <ModalHost />
        <MessageHost />
    }
}
