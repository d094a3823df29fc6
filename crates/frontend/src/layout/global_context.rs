use contracts::domain::a001_material::aggregate::Material;
use contracts::domain::a002_recipe::aggregate::Recipe;
use contracts::domain::a003_fixed_cost::aggregate::FixedCost;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::a005_label_setting::aggregate::LabelSetting;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use web_sys::window;

use crate::domain::{a001_material, a002_recipe, a003_fixed_cost, a004_product};
use crate::layout::section::{Section, SectionLoad, SectionRouter};
use crate::shared::entity_cache::EntityCache;
use crate::shared::message::MessageService;
use crate::usecases::u501_print_labels::{self, workflow::PrintWorkflow};

const SECTION_PARAM: &str = "section";

/// Session-wide client state: active section, last fetched lists and the
/// label print selection.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub router: RwSignal<SectionRouter>,
    pub materials: RwSignal<EntityCache<Material>>,
    pub recipes: RwSignal<EntityCache<Recipe>>,
    pub fixed_costs: RwSignal<EntityCache<FixedCost>>,
    pub fixed_cost_total: RwSignal<f64>,
    pub products: RwSignal<EntityCache<Product>>,
    pub label_settings: RwSignal<EntityCache<LabelSetting>>,
    pub print: RwSignal<PrintWorkflow>,
    pub messages: MessageService,
}

impl AppGlobalContext {
    pub fn new(messages: MessageService) -> Self {
        Self {
            router: RwSignal::new(SectionRouter::default()),
            materials: RwSignal::new(EntityCache::default()),
            recipes: RwSignal::new(EntityCache::default()),
            fixed_costs: RwSignal::new(EntityCache::default()),
            fixed_cost_total: RwSignal::new(0.0),
            products: RwSignal::new(EntityCache::default()),
            label_settings: RwSignal::new(EntityCache::default()),
            print: RwSignal::new(PrintWorkflow::default()),
            messages,
        }
    }

    pub fn active_section(&self) -> Section {
        self.router.with(|r| r.active())
    }

    /// Activate `section` and fetch its data, even if it is already active.
    pub fn switch_section(&self, section: Section) {
        let Some(load) = self.router.try_update(|r| r.switch_to(section)) else {
            return;
        };
        log::debug!(
            "switch_section: {} (load #{})",
            section.key(),
            load.generation
        );
        self.run_load(load);
    }

    fn run_load(&self, load: SectionLoad) {
        let ctx = *self;
        spawn_local(async move {
            let section = load.section;
            let load = Some(load);
            match section {
                Section::Materials => a001_material::refresh(ctx, load).await,
                Section::Recipes => a002_recipe::refresh(ctx, load).await,
                Section::FixedCosts => a003_fixed_cost::refresh(ctx, load).await,
                Section::Products => a004_product::refresh(ctx, load).await,
                Section::Labels => u501_print_labels::refresh(ctx, load).await,
            }
        });
    }

    /// False for the result of a section load that a newer switch has
    /// superseded; such results are dropped instead of written to a cache.
    pub fn accepts(&self, load: Option<SectionLoad>) -> bool {
        let accepted = self
            .router
            .try_with_untracked(|r| r.accepts(load.as_ref()))
            .unwrap_or(false);
        if !accepted {
            if let Some(load) = load {
                log::debug!("load #{} finished after a newer switch, dropped", load.generation);
            }
        }
        accepted
    }

    /// Restore the section from `?section=` (falling back to the first one),
    /// load it, and keep the query in sync with later switches.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.switch_section(initial_section(&search));

        let this = *self;
        Effect::new(move |_| {
            let section = this.active_section();
            let query_string = serde_qs::to_string(&HashMap::from([(
                SECTION_PARAM.to_string(),
                section.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                replace_url(&new_url);
            }
        });
    }

    /// Forget the active section so the next login starts from the first one.
    pub fn reset_router(&self) {
        // Untracked: the URL sync effect must not write the query back.
        self.router.update_untracked(|r| r.reset());
        if let Some(path) = window().and_then(|w| w.location().pathname().ok()) {
            replace_url(&path);
        }
    }
}

/// Section to open on entering the app: `?section=` when it names one,
/// otherwise the first section.
pub fn initial_section(search: &str) -> Section {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(SECTION_PARAM)
        .and_then(|key| Section::parse(key))
        .unwrap_or_default()
}

fn replace_url(url: &str) {
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_login_opens_materials() {
        assert_eq!(initial_section(""), Section::Materials);
        assert_eq!(initial_section("?"), Section::Materials);
    }

    #[test]
    fn test_section_restored_from_query() {
        assert_eq!(initial_section("?section=labels"), Section::Labels);
        assert_eq!(initial_section("?section=fixed-costs"), Section::FixedCosts);
        assert_eq!(initial_section("?tab=2&section=products&lang=ja"), Section::Products);
    }

    #[test]
    fn test_unknown_section_falls_back() {
        assert_eq!(initial_section("?section=bogus"), Section::Materials);
        assert_eq!(initial_section("?section="), Section::Materials);
        assert_eq!(initial_section("?other=labels"), Section::Materials);
    }
}
