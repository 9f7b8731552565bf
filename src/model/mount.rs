//! Active mount set - which drawer contents are currently mounted
//!
//! Derived from the stack, never authoritative. Every id in the stack is
//! mounted after a reconcile; an id may outlive its stack entry only while
//! its exit animation runs (`MountPhase::Exiting`).

use super::descriptor::{Descriptor, DrawerId};
use super::stack::DrawerStack;

/// Lifecycle phase of a mounted drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPhase {
    /// Present in the stack; content is open
    Mounted,
    /// Removed from the stack; content stays mounted with `open == false`
    /// until its exit animation finishes
    Exiting,
}

/// One mounted drawer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedDrawer {
    pub descriptor: Descriptor,
    pub phase: MountPhase,
}

impl MountedDrawer {
    pub fn id(&self) -> &DrawerId {
        &self.descriptor.id
    }

    pub fn is_open(&self) -> bool {
        self.phase == MountPhase::Mounted
    }
}

/// Mounted drawers in mount order
#[derive(Debug, Clone, Default)]
pub struct MountSet {
    entries: Vec<MountedDrawer>,
}

impl MountSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project the stack onto the mount set
    ///
    /// Stack entries are mounted (reviving any that were exiting). Entries
    /// missing from the stack start exiting when `keep_exiting` is set and
    /// are dropped otherwise. Returns the ids that started exiting.
    pub fn reconcile(&mut self, stack: &DrawerStack, keep_exiting: bool) -> Vec<DrawerId> {
        for descriptor in stack.entries() {
            match self.entries.iter_mut().find(|m| m.descriptor.id == descriptor.id) {
                Some(mounted) => {
                    if mounted.phase == MountPhase::Exiting {
                        tracing::debug!(id = %descriptor.id, "revive exiting drawer");
                    }
                    mounted.phase = MountPhase::Mounted;
                    mounted.descriptor = descriptor.clone();
                }
                None => {
                    tracing::debug!(id = %descriptor.id, "mount drawer");
                    self.entries.push(MountedDrawer {
                        descriptor: descriptor.clone(),
                        phase: MountPhase::Mounted,
                    });
                }
            }
        }

        let mut started_exit = Vec::new();
        self.entries.retain_mut(|mounted| {
            if stack.contains(&mounted.descriptor.id) {
                return true;
            }
            if !keep_exiting {
                tracing::debug!(id = %mounted.descriptor.id, "unmount drawer");
                return false;
            }
            if mounted.phase == MountPhase::Mounted {
                mounted.phase = MountPhase::Exiting;
                started_exit.push(mounted.descriptor.id.clone());
            }
            true
        });
        started_exit
    }

    /// Drop an exiting drawer once its animation is done
    ///
    /// Returns false (and leaves the set untouched) if the id is unknown or
    /// was re-opened in the meantime.
    pub fn finish_exit(&mut self, id: &DrawerId) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|m| !(m.descriptor.id == *id && m.phase == MountPhase::Exiting));
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!(%id, "unmount drawer after exit");
        }
        removed
    }

    pub fn get(&self, id: &DrawerId) -> Option<&MountedDrawer> {
        self.entries.iter().find(|m| m.descriptor.id == *id)
    }

    pub fn contains(&self, id: &DrawerId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MountedDrawer> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(ids: &[&str]) -> DrawerStack {
        let mut stack = DrawerStack::new();
        for id in ids {
            stack.open_drawer(Descriptor::task(*id));
        }
        stack
    }

    #[test]
    fn test_reconcile_mounts_every_stack_entry() {
        let stack = stack_of(&["a", "b"]);
        let mut mounted = MountSet::new();

        assert!(mounted.reconcile(&stack, false).is_empty());
        assert_eq!(mounted.len(), 2);
        assert!(mounted.iter().all(MountedDrawer::is_open));
    }

    #[test]
    fn test_reconcile_without_exit_drops_closed_entries() {
        let mut stack = stack_of(&["a", "b"]);
        let mut mounted = MountSet::new();
        mounted.reconcile(&stack, false);

        stack.close_drawer(&"task-a".into());
        mounted.reconcile(&stack, false);

        assert!(!mounted.contains(&"task-a".into()));
        assert_eq!(mounted.len(), 1);
    }

    #[test]
    fn test_exiting_entry_is_revived_on_reopen() {
        let mut stack = stack_of(&["a"]);
        let mut mounted = MountSet::new();
        mounted.reconcile(&stack, true);

        stack.close_drawer(&"task-a".into());
        assert_eq!(mounted.reconcile(&stack, true), vec![DrawerId::from("task-a")]);
        assert_eq!(mounted.get(&"task-a".into()).unwrap().phase, MountPhase::Exiting);

        stack.open_drawer(Descriptor::task("a"));
        mounted.reconcile(&stack, true);
        assert!(mounted.get(&"task-a".into()).unwrap().is_open());
        assert!(!mounted.finish_exit(&"task-a".into()));
    }
}
