//! Drawer bus tests
//!
//! Tests for channel routing, delivery order and the no-buffering contract

use std::cell::RefCell;
use std::rc::Rc;

use drawer_stack::bus::{BusEvent, Channel, DrawerBus};
use drawer_stack::model::{Descriptor, DrawerKind};

fn recorder(bus: &DrawerBus, channel: Channel, label: &'static str, log: &Rc<RefCell<Vec<String>>>) {
    let log = Rc::clone(log);
    bus.subscribe(channel, move |event| {
        log.borrow_mut()
            .push(format!("{}:{}", label, event.descriptor().id));
    });
}

#[test]
fn test_delivery_in_registration_order() {
    let bus = DrawerBus::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    recorder(&bus, Channel::OpenRequest, "first", &log);
    recorder(&bus, Channel::OpenRequest, "second", &log);

    let delivered = bus.publish(BusEvent::open(DrawerKind::Task, "7"));

    assert_eq!(delivered, 2);
    assert_eq!(*log.borrow(), vec!["first:task-7", "second:task-7"]);
}

#[test]
fn test_event_channel_mapping() {
    assert_eq!(
        BusEvent::open(DrawerKind::Note, "n").channel(),
        Channel::OpenRequest
    );
    assert_eq!(
        BusEvent::ReopenRequest(Descriptor::note("n")).channel(),
        Channel::ReopenRequest
    );
    assert_eq!(Channel::OpenRequest.name(), "open-request");
    assert_eq!(Channel::ReopenRequest.to_string(), "reopen-request");
}

#[test]
fn test_reopen_carries_descriptor_verbatim() {
    let bus = DrawerBus::new();
    let seen = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&seen);
    bus.subscribe(Channel::ReopenRequest, move |event| {
        *slot.borrow_mut() = Some(event.clone());
    });

    let mut descriptor = Descriptor::with_id("custom", DrawerKind::User, "u1");
    descriptor.timestamp = 1234;
    bus.publish(BusEvent::ReopenRequest(descriptor.clone()));

    assert_eq!(*seen.borrow(), Some(BusEvent::ReopenRequest(descriptor)));
}

#[test]
fn test_no_buffering_for_late_subscribers() {
    let bus = DrawerBus::new();
    assert_eq!(bus.publish(BusEvent::open(DrawerKind::Task, "early")), 0);

    let log = Rc::new(RefCell::new(Vec::new()));
    recorder(&bus, Channel::OpenRequest, "late", &log);

    assert!(log.borrow().is_empty());
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let bus = DrawerBus::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_ref = Rc::clone(&log);
    let id = bus.subscribe(Channel::OpenRequest, move |_| log_ref.borrow_mut().push(()));

    assert!(bus.unsubscribe(id));
    assert!(!bus.unsubscribe(id));
    bus.publish(BusEvent::open(DrawerKind::Task, "1"));

    assert!(log.borrow().is_empty());
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn test_handler_can_publish_reentrantly() {
    let bus = DrawerBus::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let forwarder = bus.clone();
    bus.subscribe(Channel::OpenRequest, move |event| {
        forwarder.publish(BusEvent::ReopenRequest(event.descriptor()));
    });
    recorder(&bus, Channel::ReopenRequest, "reopen", &log);

    bus.publish(BusEvent::open(DrawerKind::Team, "core"));

    assert_eq!(*log.borrow(), vec!["reopen:team-core"]);
    assert_eq!(bus.channel_subscriber_count(Channel::OpenRequest), 1);
}
