//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use drawer_stack::config::DrawerConfig;
use drawer_stack::messages::{DrawerMsg, Msg};
use drawer_stack::model::{AppModel, Descriptor, DrawerId, DrawerStack};
use drawer_stack::update::update;

/// Task descriptor with a short entity id (`a` → `task-a`)
pub fn task(entity: &str) -> Descriptor {
    Descriptor::task(entity)
}

pub fn id(entity: &str) -> DrawerId {
    DrawerId::from(format!("task-{}", entity))
}

/// Stack with task drawers opened in the given order
pub fn stack_of(entities: &[&str]) -> DrawerStack {
    let mut stack = DrawerStack::new();
    for entity in entities {
        stack.open_drawer(task(entity));
    }
    stack
}

/// Entity ids in stack order (`task-a` → `a`)
pub fn entities(stack: &DrawerStack) -> Vec<String> {
    stack
        .entries()
        .iter()
        .map(|d| d.entity_id.clone())
        .collect()
}

/// Model with task drawers opened through `update`
pub fn test_model(entities: &[&str]) -> AppModel {
    test_model_with_config(entities, DrawerConfig::default())
}

pub fn test_model_with_config(entities: &[&str], config: DrawerConfig) -> AppModel {
    let mut model = AppModel::new(config);
    for entity in entities {
        update(&mut model, Msg::Drawer(DrawerMsg::Open(task(entity))));
    }
    model
}

/// Config with exit animations enabled
pub fn animated_config(exit_ms: u64) -> DrawerConfig {
    DrawerConfig {
        exit_animation_ms: exit_ms,
        ..DrawerConfig::default()
    }
}
