/// Content sections of the main view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Materials,
    Recipes,
    FixedCosts,
    Products,
    Labels,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Materials,
        Section::Recipes,
        Section::FixedCosts,
        Section::Products,
        Section::Labels,
    ];

    /// Stable key, also used in the `?section=` query parameter.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Materials => "materials",
            Section::Recipes => "recipes",
            Section::FixedCosts => "fixed-costs",
            Section::Products => "products",
            Section::Labels => "labels",
        }
    }

    pub fn parse(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Materials => "材料管理",
            Section::Recipes => "レシピ管理",
            Section::FixedCosts => "固定費管理",
            Section::Products => "商品管理",
            Section::Labels => "ラベル印刷",
        }
    }
}

/// One data load for a section, tagged with the switch that requested it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionLoad {
    pub section: Section,
    pub generation: u64,
}

/// Active section plus a counter of switches.
///
/// Every switch, including one to the already active section, yields exactly
/// one load; nothing is cached between switches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionRouter {
    active: Section,
    generation: u64,
}

impl SectionRouter {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn switch_to(&mut self, section: Section) -> SectionLoad {
        self.active = section;
        self.generation += 1;
        SectionLoad {
            section,
            generation: self.generation,
        }
    }

    /// False once another switch happened after `load` was issued.
    pub fn is_current(&self, load: &SectionLoad) -> bool {
        self.generation == load.generation
    }

    /// Whether the result of `load` may still be written. Reloads that are
    /// not part of a switch (`None`, e.g. after a save) always apply.
    pub fn accepts(&self, load: Option<&SectionLoad>) -> bool {
        match load {
            Some(load) => self.is_current(load),
            None => true,
        }
    }

    /// Back to the first section without loading anything (logout).
    pub fn reset(&mut self) {
        self.active = Section::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.key()), Some(section));
        }
        assert_eq!(Section::parse("fixed_costs"), None);
        assert_eq!(Section::parse(""), None);
    }

    #[test]
    fn test_every_switch_issues_one_load() {
        let mut router = SectionRouter::default();
        let sequence = [
            Section::Labels,
            Section::Labels,
            Section::Recipes,
            Section::Materials,
            Section::Labels,
        ];
        let loads: Vec<SectionLoad> = sequence.iter().map(|&s| router.switch_to(s)).collect();

        assert_eq!(loads.len(), sequence.len());
        for (load, section) in loads.iter().zip(sequence) {
            assert_eq!(load.section, section);
        }
        assert_eq!(router.active(), Section::Labels);
        assert_eq!(router.generation, 5);
    }

    #[test]
    fn test_older_loads_are_not_current() {
        let mut router = SectionRouter::default();
        let first = router.switch_to(Section::Products);
        assert!(router.is_current(&first));
        let second = router.switch_to(Section::Recipes);
        assert!(!router.is_current(&first));
        assert!(router.is_current(&second));
    }

    #[test]
    fn test_superseded_load_is_not_written() {
        let mut router = SectionRouter::default();
        let slow = router.switch_to(Section::Materials);
        let fast = router.switch_to(Section::Materials);
        assert!(!router.accepts(Some(&slow)));
        assert!(router.accepts(Some(&fast)));
        // A reload after saving a record is never dropped.
        assert!(router.accepts(None));
    }

    #[test]
    fn test_reset_does_not_reuse_generations() {
        let mut router = SectionRouter::default();
        let load = router.switch_to(Section::Labels);
        router.reset();
        assert_eq!(router.active(), Section::Materials);
        let next = router.switch_to(Section::Materials);
        assert!(next.generation > load.generation);
    }
}
