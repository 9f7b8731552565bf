//! Drawer event bus - decoupled open/raise requests
//!
//! Any part of the UI holding a bus handle can ask for a drawer without a
//! reference to the component that owns the stack. Delivery is synchronous
//! and in subscriber registration order. Nothing is buffered: a publish with
//! no subscriber on its channel is dropped, and later subscribers never see
//! it. Callers must not assume delivery.
//!
//! The bus is single-threaded (`Rc`), matching the host event loop. Handlers
//! may publish or (un)subscribe from inside a delivery.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::model::{Descriptor, DrawerKind};

/// Named bus channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Request to open (or raise) the drawer for an entity
    OpenRequest,
    /// Republished descriptor from a drawer's raise gesture
    ReopenRequest,
}

impl Channel {
    pub fn name(&self) -> &'static str {
        match self {
            Channel::OpenRequest => "open-request",
            Channel::ReopenRequest => "reopen-request",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Message carried on the bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    OpenRequest { kind: DrawerKind, entity_id: String },
    ReopenRequest(Descriptor),
}

impl BusEvent {
    pub fn open(kind: DrawerKind, entity_id: impl Into<String>) -> Self {
        BusEvent::OpenRequest {
            kind,
            entity_id: entity_id.into(),
        }
    }

    pub fn channel(&self) -> Channel {
        match self {
            BusEvent::OpenRequest { .. } => Channel::OpenRequest,
            BusEvent::ReopenRequest(_) => Channel::ReopenRequest,
        }
    }

    /// Descriptor this request refers to
    pub fn descriptor(&self) -> Descriptor {
        match self {
            BusEvent::OpenRequest { kind, entity_id } => {
                Descriptor::new(kind.clone(), entity_id.clone())
            }
            BusEvent::ReopenRequest(descriptor) => descriptor.clone(),
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Rc<dyn Fn(&BusEvent)>;

struct Subscriber {
    id: SubscriptionId,
    channel: Channel,
    handler: Handler,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

/// Cloneable handle to a shared in-process bus
#[derive(Clone, Default)]
pub struct DrawerBus {
    inner: Rc<RefCell<BusInner>>,
}

impl fmt::Debug for DrawerBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl DrawerBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one channel
    pub fn subscribe(&self, channel: Channel, handler: impl Fn(&BusEvent) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        inner.subscribers.push(Subscriber {
            id,
            channel,
            handler: Rc::new(handler),
        });
        tracing::trace!(%channel, ?id, "bus subscribe");
        id
    }

    /// Remove a handler; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|s| s.id != id);
        let removed = inner.subscribers.len() != before;
        if removed {
            tracing::trace!(?id, "bus unsubscribe");
        }
        removed
    }

    /// Deliver an event to every handler on its channel
    ///
    /// Returns the number of handlers invoked. Handlers removed by an earlier
    /// handler in the same delivery are skipped.
    pub fn publish(&self, event: BusEvent) -> usize {
        let channel = event.channel();
        let targets: Vec<(SubscriptionId, Handler)> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.channel == channel)
            .map(|s| (s.id, Rc::clone(&s.handler)))
            .collect();

        if targets.is_empty() {
            tracing::debug!(%channel, "bus publish dropped: no subscribers");
            return 0;
        }

        let mut delivered = 0;
        for (id, handler) in targets {
            if !self.is_subscribed(id) {
                continue;
            }
            tracing::trace!(%channel, ?id, "bus deliver");
            handler(&event);
            delivered += 1;
        }
        delivered
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.inner.borrow().subscribers.iter().any(|s| s.id == id)
    }

    /// Total number of handlers across channels
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    pub fn channel_subscriber_count(&self, channel: Channel) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.channel == channel)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_publish_without_subscribers_is_dropped() {
        let bus = DrawerBus::new();
        assert_eq!(bus.publish(BusEvent::open(DrawerKind::Task, "1")), 0);
    }

    #[test]
    fn test_handlers_only_see_their_channel() {
        let bus = DrawerBus::new();
        let opens = Rc::new(Cell::new(0));
        let counter = Rc::clone(&opens);
        bus.subscribe(Channel::OpenRequest, move |_| counter.set(counter.get() + 1));

        bus.publish(BusEvent::ReopenRequest(Descriptor::task("1")));
        assert_eq!(opens.get(), 0);

        bus.publish(BusEvent::open(DrawerKind::Task, "1"));
        assert_eq!(opens.get(), 1);
    }

    #[test]
    fn test_handler_may_unsubscribe_itself() {
        let bus = DrawerBus::new();
        let slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));
        let bus_ref = bus.clone();
        let slot_ref = Rc::clone(&slot);
        let id = bus.subscribe(Channel::OpenRequest, move |_| {
            if let Some(id) = slot_ref.get() {
                bus_ref.unsubscribe(id);
            }
        });
        slot.set(Some(id));

        assert_eq!(bus.publish(BusEvent::open(DrawerKind::Note, "n")), 1);
        assert_eq!(bus.publish(BusEvent::open(DrawerKind::Note, "n")), 0);
    }
}
