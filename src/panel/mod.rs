//! Stacked panel system - presentation of open drawers
//!
//! Each mounted drawer renders one overlay anchored to the trailing edge of
//! the viewport. Panels cascade by stack position and never hold a reference
//! to the stack owner: gestures come back in as `PanelMsg`s and a raise is
//! republished on the bus.
//!
//! ## Architecture
//!
//! - `layout`: offset / z-index algorithm, `PanelState`, `PanelView`, breadcrumbs
//! - `content`: dispatch from `DrawerKind` to hosted detail content

mod content;
mod layout;

pub use content::{ContentKind, ContentProps, MountedContent};
pub use layout::{
    breadcrumbs, offset_for_position, z_index_for_position, Breadcrumb, PanelState, PanelView,
};
