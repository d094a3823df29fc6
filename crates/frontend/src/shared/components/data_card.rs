use leptos::prelude::*;

/// One record in a section list: title row with actions, free-form body.
#[component]
pub fn DataCard(
    #[prop(into)] title: String,
    /// Small badge next to the title (e.g. "デフォルト", "(無効)")
    #[prop(optional, into)]
    badge: MaybeProp<String>,
    /// Edit/delete buttons; omitted for read-only cards
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="data-item">
            <div class="data-item-header">
                <div class="data-item-title">
                    {title}
                    {move || badge.get().map(|b| view! { <span class="data-item-badge">{b}</span> })}
                </div>
                <div class="data-item-actions">
                    {actions.map(|a| a.run())}
                </div>
            </div>
            <div class="data-item-body">
                {children()}
            </div>
        </div>
    }
}
