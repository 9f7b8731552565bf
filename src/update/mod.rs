//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod drawer;
mod panel;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::StackSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use drawer::update_drawer;
pub use panel::update_panel;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Drawer(m) => drawer::update_drawer(model, m),
        Msg::Panel(m) => panel::update_panel(model, m),
    }
}

/// Traced update wrapper (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = StackSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = StackSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "stack", %diff, "state changed");
    }

    model.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Drawer::Close(DrawerId("task-1"))`
/// - `Panel::CloseAllClicked`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Drawer(m) => format!("Drawer::{:?}", m),
        Msg::Panel(m) => format!("Panel::{:?}", m),
    }
}
