//! Drawer stack - stacked contextual panel navigation
//!
//! Independent parts of a UI request an overlay detail view for a domain
//! entity (task, note, team, user) over a publish/subscribe bus. A single
//! manager owns the stack of open drawers; drawers cascade visually and are
//! navigated like a back-stack. State changes follow the Elm Architecture
//! pattern: messages in, `update`, commands out.

pub mod bus;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod manager;
pub mod messages;
pub mod model;
pub mod panel;
pub mod scenario;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use bus::{BusEvent, Channel, DrawerBus};
pub use commands::Cmd;
pub use config::DrawerConfig;
pub use manager::DrawerManager;
pub use messages::Msg;
pub use model::{AppModel, Descriptor, DrawerId, DrawerKind, DrawerStack};
