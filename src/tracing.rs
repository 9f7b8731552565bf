//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging stack
//! mutations, bus delivery and panel state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=stack=debug,panel=debug` - scoped filtering
//! - `RUST_LOG=drawer_stack::bus=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/drawer-stack/logs/drawer-stack.log` with
//! daily rotation, always at debug level.

use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, MountPhase};
use crate::panel::PanelState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// the config directory's `logs/` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "drawer-stack.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of stack and mount state for diffing and dumps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackSnapshot {
    pub entries: Vec<EntryInfo>,
    pub mounted: Vec<MountInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryInfo {
    pub id: String,
    pub kind: String,
    pub entity_id: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MountInfo {
    pub id: String,
    pub exiting: bool,
}

impl StackSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            entries: model
                .stack
                .entries()
                .iter()
                .map(|entry| EntryInfo {
                    id: entry.id.to_string(),
                    kind: entry.kind.to_string(),
                    entity_id: entry.entity_id.clone(),
                    state: format!("{:?}", PanelState::of(&model.stack, &entry.id)),
                })
                .collect(),
            mounted: model
                .mounted
                .iter()
                .map(|m| MountInfo {
                    id: m.id().to_string(),
                    exiting: m.phase == MountPhase::Exiting,
                })
                .collect(),
        }
    }

    fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    fn state_of(&self, id: &str) -> &str {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.state.as_str())
            .unwrap_or("Closed")
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StackSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        let (before, after) = (self.ids(), other.ids());
        if before != after {
            changes.push(format!("stack: [{}] → [{}]", before.join(", "), after.join(", ")));
        }

        let mut seen: Vec<&str> = before.clone();
        for &id in &after {
            if !before.contains(&id) {
                seen.push(id);
            }
        }
        for id in seen {
            let (from, to) = (self.state_of(id), other.state_of(id));
            if from != to {
                changes.push(format!("{}: {} → {}", id, from, to));
            }
        }

        if self.mounted != other.mounted {
            changes.push(format!("mounted: {} → {}", self.mounted.len(), other.mounted.len()));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
