pub mod center;
pub mod global_context;
pub mod left;
pub mod section;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell shown to an authenticated session.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |              Navbar (sections)            |
/// +------------------------------------------+
/// |              Center (active section)      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Entering the app always loads a section: the one in the URL or the first.
    ctx.init_router_integration();

    view! {
        <div id="app-section" class="app-layout">
            <TopHeader />
            <left::Left>
                <left::Navbar />
            </left::Left>
            <div class="app-main">
                <center::Center />
            </div>
        </div>
    }
}
