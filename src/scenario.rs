//! Scripted drawer sessions
//!
//! A scenario is a YAML list of UI actions replayed against a bus and a
//! manager that can be mounted and unmounted mid-run. Used by the CLI to
//! demonstrate and inspect stack behavior.
//!
//! ```yaml
//! steps:
//!   - action: open
//!     type: task
//!     entityId: "42"
//!   - action: raise
//!     id: task-42
//!   - action: breadcrumb
//!     panel: task-42
//!     index: 0
//! ```

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::bus::{BusEvent, DrawerBus};
use crate::config::DrawerConfig;
use crate::manager::DrawerManager;
use crate::messages::{DrawerMsg, Msg, PanelMsg};
use crate::model::{DrawerId, DrawerKind};
use crate::panel::PanelView;
use crate::tracing::StackSnapshot;

/// One scripted action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// Publish an open request on the bus
    Open {
        #[serde(rename = "type")]
        kind: DrawerKind,
        #[serde(rename = "entityId")]
        entity_id: String,
    },
    /// Click the hotspot of a background panel
    Raise { id: DrawerId },
    /// Close one drawer via its close button
    Close { id: DrawerId },
    /// Click the "close all" affordance
    CloseAll,
    CloseOthers { id: DrawerId },
    /// Escape key
    CloseTop,
    /// Click breadcrumb chip `index` on `panel`
    Breadcrumb { panel: DrawerId, index: usize },
    /// Advance time so due exit animations finish
    Tick { ms: u64 },
    /// Mount a manager (no-op if one is mounted)
    Mount,
    /// Drop the mounted manager and its stack
    Unmount,
}

impl Step {
    fn describe(&self) -> String {
        match self {
            Step::Open { kind, entity_id } => format!("open {} {}", kind, entity_id),
            Step::Raise { id } => format!("raise {}", id),
            Step::Close { id } => format!("close {}", id),
            Step::CloseAll => "close-all".to_string(),
            Step::CloseOthers { id } => format!("close-others {}", id),
            Step::CloseTop => "close-top".to_string(),
            Step::Breadcrumb { panel, index } => format!("breadcrumb {} on {}", index, panel),
            Step::Tick { ms } => format!("tick {}ms", ms),
            Step::Mount => "mount".to_string(),
            Step::Unmount => "unmount".to_string(),
        }
    }
}

/// A list of steps loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse scenario")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario at {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("In {}", path.display()))
    }
}

/// Presentation summary of one panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelReport {
    pub id: String,
    pub state: String,
    pub position: usize,
    pub offset: i32,
    pub z_index: i32,
    pub opacity: f32,
    pub backdrop: bool,
    pub hotspot: bool,
    pub breadcrumbs: Vec<String>,
}

impl From<&PanelView> for PanelReport {
    fn from(view: &PanelView) -> Self {
        Self {
            id: view.id.to_string(),
            state: format!("{:?}", view.state),
            position: view.position,
            offset: view.offset,
            z_index: view.z_index,
            opacity: view.opacity,
            backdrop: !view.hide_backdrop,
            hotspot: view.show_hotspot,
            breadcrumbs: view.breadcrumbs.iter().map(|b| b.label()).collect(),
        }
    }
}

/// State after one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub step: String,
    /// Handlers that received the step's bus publish, if it published
    pub delivered: Option<usize>,
    /// `None` while no manager is mounted
    pub stack: Option<StackSnapshot>,
    pub panels: Vec<PanelReport>,
}

/// Replays steps against a bus and an optional mounted manager
#[derive(Debug)]
pub struct ScenarioRunner {
    bus: DrawerBus,
    config: DrawerConfig,
    manager: Option<DrawerManager>,
}

impl ScenarioRunner {
    /// Create a runner with a manager already mounted
    pub fn new(config: DrawerConfig) -> Self {
        let bus = DrawerBus::new();
        let manager = Some(DrawerManager::mount(&bus, config.clone()));
        Self {
            bus,
            config,
            manager,
        }
    }

    pub fn manager(&self) -> Option<&DrawerManager> {
        self.manager.as_ref()
    }

    pub fn run(&mut self, scenario: &Scenario) -> Vec<StepReport> {
        scenario.steps.iter().map(|step| self.apply(step)).collect()
    }

    pub fn apply(&mut self, step: &Step) -> StepReport {
        tracing::debug!(step = %step.describe(), "scenario step");
        let mut delivered = None;

        match step {
            Step::Open { kind, entity_id } => {
                delivered = Some(
                    self.bus
                        .publish(BusEvent::open(kind.clone(), entity_id.clone())),
                );
            }
            Step::Raise { id } => self.dispatch(PanelMsg::HotspotClicked(id.clone())),
            Step::Close { id } => self.dispatch(PanelMsg::CloseClicked(id.clone())),
            Step::CloseAll => self.dispatch(PanelMsg::CloseAllClicked),
            Step::CloseOthers { id } => self.dispatch(DrawerMsg::CloseOthers(id.clone())),
            Step::CloseTop => self.dispatch(DrawerMsg::CloseTop),
            Step::Breadcrumb { panel, index } => self.dispatch(PanelMsg::BreadcrumbClicked {
                panel: panel.clone(),
                index: *index,
            }),
            Step::Tick { ms } => {
                if let Some(manager) = &self.manager {
                    manager.tick(Instant::now() + Duration::from_millis(*ms));
                }
            }
            Step::Mount => {
                if self.manager.is_none() {
                    self.manager = Some(DrawerManager::mount(&self.bus, self.config.clone()));
                }
            }
            Step::Unmount => {
                if let Some(manager) = self.manager.take() {
                    manager.unmount();
                }
            }
        }

        self.report(step.describe(), delivered)
    }

    fn dispatch(&self, msg: impl Into<Msg>) {
        match &self.manager {
            Some(manager) => manager.dispatch(msg),
            None => tracing::debug!("no manager mounted, gesture ignored"),
        }
    }

    fn report(&self, step: String, delivered: Option<usize>) -> StepReport {
        let Some(manager) = &self.manager else {
            return StepReport {
                step,
                delivered,
                stack: None,
                panels: Vec::new(),
            };
        };
        StepReport {
            step,
            delivered,
            stack: Some(manager.snapshot()),
            panels: manager.panel_views().iter().map(PanelReport::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let scenario = Scenario::from_yaml(
            r#"
steps:
  - action: open
    type: task
    entityId: "1"
  - action: close-all
  - action: breadcrumb
    panel: task-1
    index: 0
"#,
        )
        .unwrap();

        assert_eq!(
            scenario.steps,
            vec![
                Step::Open {
                    kind: DrawerKind::Task,
                    entity_id: "1".to_string()
                },
                Step::CloseAll,
                Step::Breadcrumb {
                    panel: "task-1".into(),
                    index: 0
                },
            ]
        );
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        assert!(Scenario::from_yaml("steps:\n  - action: explode\n").is_err());
    }
}
