use leptos::prelude::*;

/// Save / cancel row at the bottom of every modal form.
#[component]
pub fn FormActions(
    on_cancel: Callback<()>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="form-actions">
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || disabled.get().unwrap_or(false)
            >
                "保存"
            </button>
            <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                "キャンセル"
            </button>
        </div>
    }
}
