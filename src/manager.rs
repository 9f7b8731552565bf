//! Drawer manager - owns the stack and listens on the bus
//!
//! Exactly one manager owns a given stack. Mounting subscribes to both bus
//! channels; requests published while no manager is mounted are lost and
//! are not replayed on a later mount.

use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use crate::bus::{BusEvent, Channel, DrawerBus, SubscriptionId};
use crate::commands::Cmd;
use crate::config::DrawerConfig;
use crate::messages::{DrawerMsg, Msg};
use crate::model::{AppModel, DrawerId};
use crate::panel::{MountedContent, PanelView};
use crate::tracing::StackSnapshot;
use crate::update::update;

#[derive(Debug)]
struct PendingExit {
    id: DrawerId,
    due: Instant,
}

#[derive(Debug)]
struct ManagerInner {
    bus: DrawerBus,
    model: RefCell<AppModel>,
    pending_exits: RefCell<Vec<PendingExit>>,
    redraw_requested: Cell<bool>,
}

impl ManagerInner {
    fn dispatch(&self, msg: Msg) {
        let cmd = {
            let Ok(mut model) = self.model.try_borrow_mut() else {
                tracing::warn!(?msg, "model is borrowed, dropping message");
                return;
            };
            update(&mut model, msg)
        };
        if let Some(cmd) = cmd {
            self.run(cmd);
        }
    }

    /// Execute a command after the model borrow has ended
    fn run(&self, cmd: Cmd) {
        for cmd in cmd.into_vec() {
            match cmd {
                Cmd::None => {}
                Cmd::Redraw => self.redraw_requested.set(true),
                Cmd::Publish(event) => {
                    self.bus.publish(event);
                }
                Cmd::ScheduleExit { id, delay_ms } => {
                    let due = Instant::now() + Duration::from_millis(delay_ms);
                    let mut pending = self.pending_exits.borrow_mut();
                    pending.retain(|p| p.id != id);
                    pending.push(PendingExit { id, due });
                }
                Cmd::Batch(cmds) => cmds.into_iter().for_each(|c| self.run(c)),
            }
        }
    }

    fn handle_bus_event(&self, event: &BusEvent) {
        let msg = match event {
            BusEvent::OpenRequest { .. } => DrawerMsg::Open(event.descriptor()),
            BusEvent::ReopenRequest(descriptor) => DrawerMsg::Reopen(descriptor.clone()),
        };
        self.dispatch(Msg::Drawer(msg));
    }
}

/// Mounted owner of a drawer stack
///
/// Dropping the manager unsubscribes it from the bus.
#[derive(Debug)]
pub struct DrawerManager {
    inner: Rc<ManagerInner>,
    subscriptions: Vec<SubscriptionId>,
}

impl DrawerManager {
    /// Create a manager with an empty stack and subscribe it to `bus`
    pub fn mount(bus: &DrawerBus, config: DrawerConfig) -> Self {
        let inner = Rc::new(ManagerInner {
            bus: bus.clone(),
            model: RefCell::new(AppModel::new(config)),
            pending_exits: RefCell::new(Vec::new()),
            redraw_requested: Cell::new(false),
        });

        let subscriptions = [Channel::OpenRequest, Channel::ReopenRequest]
            .into_iter()
            .map(|channel| {
                let weak: Weak<ManagerInner> = Rc::downgrade(&inner);
                bus.subscribe(channel, move |event| {
                    if let Some(inner) = weak.upgrade() {
                        inner.handle_bus_event(event);
                    }
                })
            })
            .collect();

        tracing::debug!("drawer manager mounted");
        Self {
            inner,
            subscriptions,
        }
    }

    /// Unsubscribe and discard the stack
    pub fn unmount(self) {}

    /// Run a message through `update` and execute the resulting command
    pub fn dispatch(&self, msg: impl Into<Msg>) {
        self.inner.dispatch(msg.into());
    }

    /// Finish every exit animation that is due at `now`
    ///
    /// Returns the number of drawers unmounted.
    pub fn tick(&self, now: Instant) -> usize {
        let due: Vec<DrawerId> = {
            let mut pending = self.inner.pending_exits.borrow_mut();
            let (due, waiting): (Vec<_>, Vec<_>) = pending.drain(..).partition(|p| p.due <= now);
            *pending = waiting;
            due.into_iter().map(|p| p.id).collect()
        };

        let count = due.len();
        for id in due {
            self.inner.dispatch(Msg::Drawer(DrawerMsg::ExitFinished(id)));
        }
        count
    }

    /// Whether any exit animation is still waiting
    pub fn has_pending_exits(&self) -> bool {
        !self.inner.pending_exits.borrow().is_empty()
    }

    /// Returns and clears the redraw flag set by state changes
    pub fn take_redraw(&self) -> bool {
        self.inner.redraw_requested.take()
    }

    /// Read-only access to the model
    pub fn model(&self) -> Ref<'_, AppModel> {
        self.inner.model.borrow()
    }

    pub fn bus(&self) -> &DrawerBus {
        &self.inner.bus
    }

    /// Contents to render, in mount order; kinds without content are skipped
    pub fn mounted_contents(&self) -> Vec<MountedContent> {
        self.model()
            .mounted
            .iter()
            .filter_map(MountedContent::for_mounted)
            .collect()
    }

    /// Presentation of one mounted panel
    pub fn panel_view(&self, id: &DrawerId) -> Option<PanelView> {
        let model = self.model();
        let mounted = model.mounted.get(id)?;
        Some(PanelView::compute(
            &model.stack,
            id,
            mounted.is_open(),
            &model.config,
        ))
    }

    /// Presentation of every mounted panel, in mount order
    pub fn panel_views(&self) -> Vec<PanelView> {
        let model = self.model();
        model
            .mounted
            .iter()
            .map(|m| PanelView::compute(&model.stack, m.id(), m.is_open(), &model.config))
            .collect()
    }

    pub fn snapshot(&self) -> StackSnapshot {
        StackSnapshot::from_model(&self.model())
    }
}

impl Drop for DrawerManager {
    fn drop(&mut self) {
        for id in self.subscriptions.drain(..) {
            self.inner.bus.unsubscribe(id);
        }
        tracing::debug!("drawer manager unmounted");
    }
}
