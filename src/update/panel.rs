//! Panel gesture handlers
//!
//! Panels never call the stack to raise themselves: the raise gesture
//! republishes the panel's stored descriptor on the bus and the manager's
//! subscription brings it back in as a `DrawerMsg::Reopen`.

use crate::bus::BusEvent;
use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::{AppModel, DrawerId};

use super::drawer::sync_mounted;

/// Update function for panel gestures
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::HotspotClicked(id) | PanelMsg::BackgroundClicked(id) => raise(model, &id),

        PanelMsg::BreadcrumbClicked { panel, index } => {
            if model.stack.drawer_position(&panel) == Some(index) {
                tracing::trace!(%panel, index, "breadcrumb for current panel ignored");
                return None;
            }
            if index >= model.stack.stack_size() {
                return None;
            }

            let forward: Vec<DrawerId> = model.stack.ids().skip(index + 1).cloned().collect();
            if forward.is_empty() {
                return None;
            }
            tracing::debug!(index, closed = forward.len(), "breadcrumb truncate");
            for id in forward.iter().rev() {
                model.stack.close_drawer(id);
            }
            Some(sync_mounted(model))
        }

        PanelMsg::CloseAllClicked => {
            // The affordance only exists while more than one drawer is open
            if model.stack.stack_size() <= 1 {
                return None;
            }
            model.stack.close_all_drawers();
            Some(sync_mounted(model))
        }

        PanelMsg::CloseClicked(id) => {
            if !model.stack.contains(&id) {
                return None;
            }
            model.stack.close_drawer(&id);
            Some(sync_mounted(model))
        }
    }
}

/// Republish a background panel's descriptor so the manager raises it
fn raise(model: &AppModel, id: &DrawerId) -> Option<Cmd> {
    if model.stack.drawer_position(id).is_none() || model.stack.is_top_drawer(id) {
        return None;
    }
    let mounted = model.mounted.get(id)?;
    tracing::debug!(%id, "raise gesture");
    Some(Cmd::Publish(BusEvent::ReopenRequest(
        mounted.descriptor.clone(),
    )))
}
