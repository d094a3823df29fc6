use crate::domain::a001_material::ui::list::MaterialList;
use crate::domain::a002_recipe::ui::list::RecipeList;
use crate::domain::a003_fixed_cost::ui::list::FixedCostList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::section::Section;
use crate::usecases::u501_print_labels::LabelsSection;
use leptos::prelude::*;

#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Re-render only when the section changes, not on every reload of it.
    let active = Memo::new(move |_| ctx.active_section());

    view! {
        <div data-zone="center" class="content-section active">
            {move || match active.get() {
                Section::Materials => view! { <MaterialList /> }.into_any(),
                Section::Recipes => view! { <RecipeList /> }.into_any(),
                Section::FixedCosts => view! { <FixedCostList /> }.into_any(),
                Section::Products => view! { <ProductList /> }.into_any(),
                Section::Labels => view! { <LabelsSection /> }.into_any(),
            }}
        </div>
    }
}
