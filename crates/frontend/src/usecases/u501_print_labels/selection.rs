use contracts::domain::common::EntityId;

/// Products chosen for the next label print batch.
///
/// Ids are unique and keep their insertion order, so the print request lists
/// products in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<EntityId>,
}

impl SelectionSet {
    /// Add the id if absent, remove it if present. Returns whether the id is
    /// selected afterwards.
    pub fn toggle(&mut self, id: EntityId) -> bool {
        match self.ids.iter().position(|&x| x == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.ids.clone()
    }

    /// Drop ids that no longer reference a loaded product. Returns how many
    /// were dropped.
    pub fn retain_existing(&mut self, existing: &[EntityId]) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| existing.contains(id));
        before - self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_restores_contents() {
        let mut set = SelectionSet::default();
        set.toggle(3);
        set.toggle(7);
        let before = set.clone();

        assert!(set.toggle(11));
        assert!(!set.toggle(11));
        assert_eq!(set, before);

        assert!(!set.toggle(3));
        assert!(set.toggle(3));
        assert_eq!(set.len(), before.len());
        assert!(set.contains(3) && set.contains(7));
    }

    #[test]
    fn test_len_tracks_every_toggle_sequence() {
        let toggles = [1, 2, 1, 3, 3, 3, 4, 2, 5, 1];
        let mut set = SelectionSet::default();
        let mut expected: Vec<EntityId> = Vec::new();
        for id in toggles {
            set.toggle(id);
            if let Some(pos) = expected.iter().position(|&x| x == id) {
                expected.remove(pos);
            } else {
                expected.push(id);
            }
            assert_eq!(set.len(), expected.len());
        }
        assert_eq!(set.ids(), expected);
    }

    #[test]
    fn test_ids_keep_pick_order() {
        let mut set = SelectionSet::default();
        set.toggle(7);
        set.toggle(3);
        assert_eq!(set.ids(), vec![7, 3]);
    }

    #[test]
    fn test_retain_existing_prunes_deleted_products() {
        let mut set = SelectionSet::default();
        set.toggle(3);
        set.toggle(7);
        set.toggle(9);
        assert_eq!(set.retain_existing(&[1, 3, 9]), 1);
        assert_eq!(set.ids(), vec![3, 9]);
        assert_eq!(set.retain_existing(&[1, 3, 9]), 0);
        assert_eq!(set.retain_existing(&[]), 2);
        assert!(set.is_empty());
    }
}
