use crate::layout::global_context::AppGlobalContext;
use crate::layout::section::Section;
use crate::shared::icons;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="main-nav-bar">
            <ul>
                {Section::ALL.into_iter().map(|section| {
                    view! {
                        <li
                            class="nav-btn"
                            class:active=move || ctx.active_section() == section
                            on:click=move |_| ctx.switch_section(section)
                        >
                            {icons::icon(section.key())}
                            <span>{section.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
