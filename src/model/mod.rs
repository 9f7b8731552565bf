//! Application model - the complete drawer state
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod descriptor;
pub mod mount;
pub mod stack;

pub use descriptor::{Descriptor, DrawerId, DrawerKind};
pub use mount::{MountPhase, MountSet, MountedDrawer};
pub use stack::DrawerStack;

use crate::config::DrawerConfig;

/// The complete drawer model owned by one manager
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    /// Authoritative ordering of open drawers
    pub stack: DrawerStack,
    /// Derived set of mounted drawer contents
    pub mounted: MountSet,
    /// Layout and animation tunables
    pub config: DrawerConfig,
}

impl AppModel {
    pub fn new(config: DrawerConfig) -> Self {
        Self {
            stack: DrawerStack::new(),
            mounted: MountSet::new(),
            config,
        }
    }

    /// Re-derive the mount set from the stack
    ///
    /// Returns ids whose content should stay mounted for an exit animation.
    pub fn sync_mounted(&mut self) -> Vec<DrawerId> {
        let keep_exiting = self.config.exit_animation_ms > 0;
        self.mounted.reconcile(&self.stack, keep_exiting)
    }

    /// Validate stack and mount set consistency
    ///
    /// This function checks that:
    /// - No id appears twice in the stack
    /// - Every stack id is mounted and open
    /// - Every mounted id missing from the stack is exiting
    ///
    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        let ids: Vec<&DrawerId> = self.stack.ids().collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(
                !ids[i + 1..].contains(id),
                "[{}] drawer {} appears twice in the stack",
                context,
                id
            );
            assert!(
                self.mounted.get(id).is_some_and(MountedDrawer::is_open),
                "[{}] drawer {} is in the stack but not mounted",
                context,
                id
            );
        }

        for mounted in self.mounted.iter() {
            if !self.stack.contains(mounted.id()) {
                assert_eq!(
                    mounted.phase,
                    MountPhase::Exiting,
                    "[{}] drawer {} is mounted but not in the stack",
                    context,
                    mounted.id()
                );
            }
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self, _context: &str) {}
}
