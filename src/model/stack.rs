//! The drawer stack - single authoritative ordering of open panels
//!
//! Index 0 is the drawer opened longest ago (furthest back); the last index
//! is the foreground drawer. Ids are unique. A drawer's position only changes
//! by being appended, moved to the end on re-open, or removed.

use super::descriptor::{now_millis, Descriptor, DrawerId};

/// Ordered collection of open drawer descriptors
///
/// Entries are private: all mutation goes through the four operations
/// `open_drawer`, `close_drawer`, `close_all_drawers` and `close_others`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawerStack {
    entries: Vec<Descriptor>,
}

impl DrawerStack {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Open a drawer, or raise it to the top if it is already open
    ///
    /// A raised drawer keeps its stored descriptor (and timestamp); a new
    /// drawer is appended with a fresh timestamp.
    pub fn open_drawer(&mut self, descriptor: Descriptor) {
        if let Some(index) = self.index_of(&descriptor.id) {
            let existing = self.entries.remove(index);
            tracing::debug!(id = %existing.id, from = index, "raise drawer");
            self.entries.push(existing);
        } else {
            let mut descriptor = descriptor;
            descriptor.timestamp = now_millis();
            tracing::debug!(id = %descriptor.id, kind = %descriptor.kind, "open drawer");
            self.entries.push(descriptor);
        }
    }

    /// Remove a drawer; absent ids are ignored
    pub fn close_drawer(&mut self, id: &DrawerId) {
        if let Some(index) = self.index_of(id) {
            self.entries.remove(index);
            tracing::debug!(%id, at = index, "close drawer");
        }
    }

    /// Remove every drawer
    pub fn close_all_drawers(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(count = self.entries.len(), "close all drawers");
        }
        self.entries.clear();
    }

    /// Keep only the drawer with `id`
    ///
    /// When `id` is not open nothing matches, so the stack ends up empty.
    pub fn close_others(&mut self, id: &DrawerId) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id == *id);
        tracing::debug!(%id, closed = before - self.entries.len(), "close other drawers");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Zero-based position of a drawer, `None` if it is not tracked
    pub fn drawer_position(&self, id: &DrawerId) -> Option<usize> {
        self.index_of(id)
    }

    /// Number of open drawers
    pub fn stack_size(&self) -> usize {
        self.entries.len()
    }

    /// Whether `id` is the foreground drawer (false on an empty stack)
    pub fn is_top_drawer(&self, id: &DrawerId) -> bool {
        self.entries.last().is_some_and(|top| top.id == *id)
    }

    /// Read-only view of the stack, least recent first
    pub fn entries(&self) -> &[Descriptor] {
        &self.entries
    }

    /// The foreground drawer, if any
    pub fn top(&self) -> Option<&Descriptor> {
        self.entries.last()
    }

    pub fn get(&self, id: &DrawerId) -> Option<&Descriptor> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    pub fn contains(&self, id: &DrawerId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in stack order
    pub fn ids(&self) -> impl Iterator<Item = &DrawerId> {
        self.entries.iter().map(|entry| &entry.id)
    }

    fn index_of(&self, id: &DrawerId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(stack: &DrawerStack) -> Vec<&str> {
        stack.ids().map(DrawerId::as_str).collect()
    }

    #[test]
    fn test_open_appends_in_order() {
        let mut stack = DrawerStack::new();
        stack.open_drawer(Descriptor::task("a"));
        stack.open_drawer(Descriptor::note("b"));

        assert_eq!(ids(&stack), vec!["task-a", "note-b"]);
        assert!(stack.entries().iter().all(|d| d.timestamp > 0));
    }

    #[test]
    fn test_raise_keeps_stored_descriptor() {
        let mut stack = DrawerStack::new();
        stack.open_drawer(Descriptor::task("a"));
        stack.open_drawer(Descriptor::task("b"));
        let stamped = stack.get(&"task-a".into()).unwrap().timestamp;

        stack.open_drawer(Descriptor::task("a"));

        assert_eq!(ids(&stack), vec!["task-b", "task-a"]);
        assert_eq!(stack.top().unwrap().timestamp, stamped);
    }

    #[test]
    fn test_is_top_on_empty_stack() {
        let stack = DrawerStack::new();
        assert!(!stack.is_top_drawer(&"task-a".into()));
        assert_eq!(stack.drawer_position(&"task-a".into()), None);
    }
}
