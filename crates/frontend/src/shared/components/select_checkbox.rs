use leptos::prelude::*;

/// Selection checkbox living inside a clickable card.
///
/// The click never bubbles to the card, so one user click toggles exactly once
/// whether it lands on the box or on the card around it.
#[component]
pub fn SelectCheckbox(
    checked: Signal<bool>,
    /// Called with the new state
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <input
            type="checkbox"
            class="product-checkbox"
            prop:checked=checked
            on:click=|e| e.stop_propagation()
            on:change=move |ev| {
                let checked = event_target_checked(&ev);
                on_change.run(checked);
            }
        />
    }
}
