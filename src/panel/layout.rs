//! Stacked panel layout and per-panel state
//!
//! Everything a panel draws is a pure function of its position in the stack:
//! horizontal offset, z-index, opacity, backdrop, hotspot and breadcrumbs.

use crate::config::DrawerConfig;
use crate::model::{DrawerId, DrawerKind, DrawerStack};

/// Horizontal offset for a panel at `position`
///
/// Position 0 sits flush with the trailing edge; position 1 is shifted by a
/// full `offset_unit`; each further position adds `secondary_step`.
/// Saturates instead of overflowing for extreme configured constants.
pub fn offset_for_position(position: usize, offset_unit: i32, secondary_step: i32) -> i32 {
    match position {
        0 => 0,
        1 => offset_unit.saturating_neg(),
        p => offset_unit
            .saturating_add(position_to_i32(p - 1).saturating_mul(secondary_step))
            .saturating_neg(),
    }
}

/// z-index for a panel at `position`, increasing with recency
pub fn z_index_for_position(position: usize, base_z: i32) -> i32 {
    base_z.saturating_add(position_to_i32(position))
}

fn position_to_i32(position: usize) -> i32 {
    i32::try_from(position).unwrap_or(i32::MAX)
}

/// Per-panel state machine
///
/// Transitions follow from stack changes: a panel becomes `Foreground` when it
/// is opened or raised (or everything above it closes), `Background` when
/// another panel opens above it, and `Closed` when its entry leaves the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Background,
    Foreground,
}

impl PanelState {
    pub fn derive(open: bool, is_top: bool) -> Self {
        match (open, is_top) {
            (false, _) => PanelState::Closed,
            (true, true) => PanelState::Foreground,
            (true, false) => PanelState::Background,
        }
    }

    /// State of the drawer `id` given the current stack
    pub fn of(stack: &DrawerStack, id: &DrawerId) -> Self {
        if !stack.contains(id) {
            return PanelState::Closed;
        }
        PanelState::derive(true, stack.is_top_drawer(id))
    }
}

/// One breadcrumb chip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// 0-based stack position
    pub index: usize,
    /// 1-based number shown on the chip
    pub number: usize,
    pub id: DrawerId,
    pub kind: DrawerKind,
    pub entity_id: String,
    /// Chip belongs to the panel rendering the strip
    pub is_current: bool,
}

impl Breadcrumb {
    pub fn label(&self) -> String {
        format!("{}. {}", self.number, self.kind.display_name())
    }
}

/// Breadcrumb strip for a panel; empty unless more than one drawer is open
pub fn breadcrumbs(stack: &DrawerStack, current: Option<usize>) -> Vec<Breadcrumb> {
    if stack.stack_size() <= 1 {
        return Vec::new();
    }
    stack
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| Breadcrumb {
            index,
            number: index + 1,
            id: entry.id.clone(),
            kind: entry.kind.clone(),
            entity_id: entry.entity_id.clone(),
            is_current: current == Some(index),
        })
        .collect()
}

/// Fully resolved presentation of one panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub id: DrawerId,
    /// Effective position (0 when the id is not tracked by the stack)
    pub position: usize,
    /// Effective top flag (true when the id is not tracked by the stack)
    pub is_top: bool,
    pub state: PanelState,
    pub offset: i32,
    pub z_index: i32,
    pub width: u32,
    pub opacity: f32,
    /// Only the top panel shows an interactive dimmed backdrop
    pub hide_backdrop: bool,
    pub show_hotspot: bool,
    pub hotspot_width: u32,
    pub show_breadcrumbs: bool,
    pub show_close_all: bool,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl PanelView {
    /// Compute the view for panel `id`
    ///
    /// An open panel whose id the stack does not track renders as a
    /// standalone top-level panel at position 0. A closed (exiting) panel is
    /// inert: no backdrop, hotspot or breadcrumbs, layered above the stack
    /// while it animates out.
    pub fn compute(stack: &DrawerStack, id: &DrawerId, open: bool, config: &DrawerConfig) -> Self {
        let tracked = stack.drawer_position(id);
        let position = tracked.unwrap_or(0);
        let is_top = open && (tracked.is_none() || stack.is_top_drawer(id));
        let chrome = open && stack.stack_size() > 1;
        let z_index = if open {
            z_index_for_position(position, config.base_z)
        } else {
            z_index_for_position(stack.stack_size(), config.base_z)
        };

        Self {
            id: id.clone(),
            position,
            is_top,
            state: PanelState::derive(open, is_top),
            offset: offset_for_position(position, config.offset_unit, config.secondary_step),
            z_index,
            width: config.panel_width,
            opacity: if is_top || !open { 1.0 } else { config.background_opacity },
            hide_backdrop: !is_top,
            show_hotspot: open && !is_top,
            hotspot_width: config.hotspot_width,
            show_breadcrumbs: chrome,
            show_close_all: chrome,
            breadcrumbs: if chrome { breadcrumbs(stack, tracked) } else { Vec::new() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Descriptor;

    #[test]
    fn test_offset_cascade() {
        assert_eq!(offset_for_position(0, 60, 10), 0);
        assert_eq!(offset_for_position(1, 60, 10), -60);
        assert_eq!(offset_for_position(2, 60, 10), -70);
        assert_eq!(offset_for_position(3, 60, 10), -80);
    }

    #[test]
    fn test_z_index_grows_with_position() {
        assert_eq!(z_index_for_position(0, 1200), 1200);
        assert_eq!(z_index_for_position(3, 1200), 1203);
    }

    #[test]
    fn test_extreme_constants_saturate() {
        assert_eq!(offset_for_position(1, i32::MIN, 10), i32::MAX);
        assert_eq!(offset_for_position(3, 60, 2_000_000_000), -i32::MAX);
        assert_eq!(offset_for_position(usize::MAX, i32::MAX, i32::MAX), -i32::MAX);
        assert_eq!(z_index_for_position(2, i32::MAX), i32::MAX);
        assert_eq!(z_index_for_position(usize::MAX, 0), i32::MAX);
    }

    #[test]
    fn test_closed_panel_is_inert() {
        let mut stack = DrawerStack::new();
        stack.open_drawer(Descriptor::task("1"));
        stack.open_drawer(Descriptor::task("2"));

        let config = DrawerConfig::default();
        let view = PanelView::compute(&stack, &DrawerId::from("task-3"), false, &config);
        assert_eq!(view.state, PanelState::Closed);
        assert!(!view.is_top);
        assert!(view.hide_backdrop);
        assert!(!view.show_hotspot);
        assert!(!view.show_breadcrumbs);
        assert!(!view.show_close_all);
        assert!(view.breadcrumbs.is_empty());
        assert_eq!(view.z_index, 1202);
    }

    #[test]
    fn test_single_drawer_has_no_breadcrumbs() {
        let mut stack = DrawerStack::new();
        stack.open_drawer(Descriptor::task("1"));
        assert!(breadcrumbs(&stack, Some(0)).is_empty());
    }

    #[test]
    fn test_breadcrumb_label_is_one_indexed() {
        let mut stack = DrawerStack::new();
        stack.open_drawer(Descriptor::task("1"));
        stack.open_drawer(Descriptor::user("u"));

        let crumbs = breadcrumbs(&stack, Some(1));
        assert_eq!(crumbs[0].label(), "1. Task");
        assert_eq!(crumbs[1].label(), "2. User");
        assert!(crumbs[1].is_current);
        assert!(!crumbs[0].is_current);
    }
}
