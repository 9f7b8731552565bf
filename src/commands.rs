//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! Update functions never touch the bus directly; they return `Cmd::Publish`
//! and the manager publishes once the model borrow has ended.

use crate::bus::BusEvent;
use crate::model::DrawerId;

/// Side effect requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Stack or mount set changed; panels must re-query their position
    Redraw,
    /// Publish an event on the drawer bus
    Publish(BusEvent),
    /// Keep closed content mounted for `delay_ms`, then send
    /// `DrawerMsg::ExitFinished(id)`
    ScheduleExit { id: DrawerId, delay_ms: u64 },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, collapsing trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Delivery triggers its own update (and redraw) if anyone listens
            Cmd::Publish(_) => false,
            Cmd::ScheduleExit { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into execution order
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
