//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{Descriptor, DrawerId};

/// Stack-level messages (what the manager forwards from the bus, plus
/// direct close requests from hosted content)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerMsg {
    /// Open a drawer, or raise it if already open
    Open(Descriptor),
    /// Raise a drawer from its republished descriptor
    Reopen(Descriptor),
    /// Close one drawer (hosted content's `on_close`)
    Close(DrawerId),
    /// Close every drawer
    CloseAll,
    /// Close every drawer except one
    CloseOthers(DrawerId),
    /// Close the foreground drawer (Escape)
    CloseTop,
    /// Exit animation for a closed drawer has finished
    ExitFinished(DrawerId),
}

/// Gestures on a stacked panel's chrome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMsg {
    /// Edge hotspot of a background panel was clicked
    HotspotClicked(DrawerId),
    /// Panel surface outside its content was clicked
    BackgroundClicked(DrawerId),
    /// Breadcrumb chip at `index` (0-based stack position) clicked on `panel`
    BreadcrumbClicked { panel: DrawerId, index: usize },
    /// "Close all" affordance clicked
    CloseAllClicked,
    /// Panel's own close button clicked
    CloseClicked(DrawerId),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Drawer(DrawerMsg),
    Panel(PanelMsg),
}

impl From<DrawerMsg> for Msg {
    fn from(msg: DrawerMsg) -> Self {
        Msg::Drawer(msg)
    }
}

impl From<PanelMsg> for Msg {
    fn from(msg: PanelMsg) -> Self {
        Msg::Panel(msg)
    }
}
