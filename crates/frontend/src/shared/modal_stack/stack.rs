/// Identifier of one overlay on the stack; never reused.
pub type ModalId = u64;

/// Ordered overlays, last pushed = topmost.
///
/// The single close strategy for every dialog: `pop` closes the topmost,
/// `clear` closes everything, `close` removes one specific overlay (used by
/// backdrop clicks and by a dialog closing itself).
#[derive(Clone, Debug)]
pub struct ModalStack<T> {
    entries: Vec<(ModalId, T)>,
    next_id: ModalId,
}

impl<T> Default for ModalStack<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> ModalStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) -> ModalId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, item));
        id
    }

    /// Close the topmost overlay; returns its id.
    pub fn pop(&mut self) -> Option<ModalId> {
        self.entries.pop().map(|(id, _)| id)
    }

    /// Close one overlay wherever it sits; false if it was already gone.
    pub fn close(&mut self, id: ModalId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        before != self.entries.len()
    }

    /// Close every overlay; returns how many were open.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_id(&self) -> Option<ModalId> {
        self.entries.last().map(|(id, _)| *id)
    }

    pub fn contains(&self, id: ModalId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    /// Bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = (ModalId, &T)> {
        self.entries.iter().map(|(id, item)| (*id, item))
    }

    pub fn get(&self, id: ModalId) -> Option<&T> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, item)| item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_closes_only_the_topmost() {
        let mut stack = ModalStack::new();
        let a = stack.push("settings manager");
        let b = stack.push("preset form");
        assert_eq!(stack.top_id(), Some(b));

        assert_eq!(stack.pop(), Some(b));
        assert_eq!(stack.len(), 1);
        assert!(stack.contains(a));
        assert_eq!(stack.top_id(), Some(a));
    }

    #[test]
    fn test_clear_closes_everything() {
        let mut stack = ModalStack::new();
        stack.push("a");
        stack.push("b");
        assert_eq!(stack.clear(), 2);
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_close_by_id_keeps_the_rest_in_order() {
        let mut stack = ModalStack::new();
        let a = stack.push("a");
        let b = stack.push("b");
        let c = stack.push("c");

        assert!(stack.close(b));
        assert!(!stack.close(b));
        let order: Vec<_> = stack.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![a, c]);
        assert_eq!(stack.get(c), Some(&"c"));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut stack = ModalStack::new();
        let a = stack.push(());
        stack.pop();
        let b = stack.push(());
        assert_ne!(a, b);
        stack.clear();
        assert!(stack.push(()) > b);
    }
}
