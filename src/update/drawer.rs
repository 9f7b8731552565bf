//! Drawer update handlers
//!
//! Forwards stack requests into the stack, then re-derives the mount set.
//! The mount set is only ever recomputed from the stack, never written here.

use crate::commands::Cmd;
use crate::messages::DrawerMsg;
use crate::model::AppModel;

/// Update function for drawer messages
pub fn update_drawer(model: &mut AppModel, msg: DrawerMsg) -> Option<Cmd> {
    match msg {
        DrawerMsg::Open(descriptor) | DrawerMsg::Reopen(descriptor) => {
            model.stack.open_drawer(descriptor);
        }
        DrawerMsg::Close(id) => {
            if !model.stack.contains(&id) {
                return None;
            }
            model.stack.close_drawer(&id);
        }
        DrawerMsg::CloseAll => {
            if model.stack.is_empty() {
                return None;
            }
            model.stack.close_all_drawers();
        }
        DrawerMsg::CloseOthers(id) => {
            model.stack.close_others(&id);
        }
        DrawerMsg::CloseTop => {
            let top = model.stack.top()?.id.clone();
            model.stack.close_drawer(&top);
        }
        DrawerMsg::ExitFinished(id) => {
            return model.mounted.finish_exit(&id).then_some(Cmd::Redraw);
        }
    }

    Some(sync_mounted(model))
}

/// Reconcile the mount set and schedule exit animations
pub(super) fn sync_mounted(model: &mut AppModel) -> Cmd {
    let delay_ms = model.config.exit_animation_ms;
    let exits = model
        .sync_mounted()
        .into_iter()
        .map(|id| Cmd::ScheduleExit { id, delay_ms });

    Cmd::batch(std::iter::once(Cmd::Redraw).chain(exits).collect())
}
