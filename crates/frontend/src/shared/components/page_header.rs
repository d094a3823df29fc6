use leptos::prelude::*;

/// Header of a content section: title on the left, action buttons on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,

    /// Optional line under the title
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <div class="section-header__text">
                <h2 class="section-header__title">{title}</h2>
                {move || subtitle.get().map(|s| view! {
                    <div class="section-header__subtitle">{s}</div>
                })}
            </div>
            <div class="section-header__actions">
                {children()}
            </div>
        </div>
    }
}
