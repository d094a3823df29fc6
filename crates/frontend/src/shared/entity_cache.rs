use contracts::domain::common::{AggregateRoot, EntityId};

/// Last fetched list of one resource.
///
/// Replaced wholesale on every successful fetch; edit forms look records up
/// here by id.
#[derive(Clone, Debug)]
pub struct EntityCache<T> {
    items: Vec<T>,
}

impl<T> Default for EntityCache<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: AggregateRoot> EntityCache<T> {
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn find(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.items.iter().map(AggregateRoot::id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_fixed_cost::aggregate::FixedCost;

    fn cost(id: EntityId, name: &str) -> FixedCost {
        FixedCost {
            id,
            name: name.into(),
            monthly_amount: 1000.0,
            is_active: true,
        }
    }

    #[test]
    fn test_replace_is_not_a_merge() {
        let mut cache = EntityCache::default();
        cache.replace(vec![cost(1, "家賃"), cost(2, "電気代")]);
        cache.replace(vec![cost(3, "水道代")]);
        assert_eq!(cache.ids(), vec![3]);
        assert!(cache.find(1).is_none());
        assert_eq!(cache.find(3).map(|c| c.name.as_str()), Some("水道代"));
    }

    #[test]
    fn test_empty_fetch_clears_previous_items() {
        let mut cache = EntityCache::default();
        cache.replace(vec![cost(1, "家賃")]);
        cache.replace(Vec::new());
        assert!(cache.is_empty());
        assert!(cache.ids().is_empty());
    }
}
