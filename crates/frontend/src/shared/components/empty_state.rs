use leptos::prelude::*;

#[component]
pub fn EmptyState(#[prop(into)] text: String) -> impl IntoView {
    view! { <p class="empty-state">{text}</p> }
}
