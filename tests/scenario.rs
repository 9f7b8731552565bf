//! Scenario runner tests
//!
//! End-to-end replays through the bus, including mount/unmount.

use drawer_stack::config::DrawerConfig;
use drawer_stack::scenario::{Scenario, ScenarioRunner};

fn run(yaml: &str) -> Vec<drawer_stack::scenario::StepReport> {
    let scenario = Scenario::from_yaml(yaml).unwrap();
    ScenarioRunner::new(DrawerConfig::default()).run(&scenario)
}

fn stack_ids(report: &drawer_stack::scenario::StepReport) -> Vec<String> {
    report
        .stack
        .as_ref()
        .map(|s| s.entries.iter().map(|e| e.id.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn test_open_raise_and_truncate() {
    let reports = run(r#"
steps:
  - { action: open, type: task, entityId: "1" }
  - { action: open, type: note, entityId: "2" }
  - { action: open, type: user, entityId: "3" }
  - { action: raise, id: task-1 }
  - { action: breadcrumb, panel: task-1, index: 0 }
"#);

    assert_eq!(stack_ids(&reports[2]), vec!["task-1", "note-2", "user-3"]);
    assert_eq!(stack_ids(&reports[3]), vec!["note-2", "user-3", "task-1"]);
    assert_eq!(stack_ids(&reports[4]), vec!["note-2"]);
}

#[test]
fn test_panel_report_layout() {
    let reports = run(r#"
steps:
  - { action: open, type: task, entityId: "a" }
  - { action: open, type: task, entityId: "b" }
"#);

    let panels = &reports[1].panels;
    assert_eq!(panels.len(), 2);
    assert_eq!(panels[0].state, "Background");
    assert!(!panels[0].backdrop);
    assert!(panels[0].hotspot);
    assert_eq!(panels[1].state, "Foreground");
    assert_eq!(panels[1].offset, -60);
    assert_eq!(panels[1].breadcrumbs, vec!["1. Task", "2. Task"]);
}

#[test]
fn test_open_while_unmounted_is_lost() {
    let reports = run(r#"
steps:
  - { action: unmount }
  - { action: open, type: task, entityId: "lost" }
  - { action: mount }
  - { action: open, type: task, entityId: "kept" }
"#);

    assert_eq!(reports[1].delivered, Some(0));
    assert!(reports[1].stack.is_none());
    assert!(stack_ids(&reports[2]).is_empty());
    assert_eq!(stack_ids(&reports[3]), vec!["task-kept"]);
    assert_eq!(reports[3].delivered, Some(1));
}

#[test]
fn test_close_variants() {
    let reports = run(r#"
steps:
  - { action: open, type: team, entityId: "x" }
  - { action: open, type: team, entityId: "y" }
  - { action: open, type: team, entityId: "z" }
  - { action: close-others, id: team-y }
  - { action: open, type: team, entityId: "w" }
  - { action: close-top }
  - { action: close, id: team-y }
  - { action: open, type: board, entityId: "b" }
  - { action: close-all }
"#);

    assert_eq!(stack_ids(&reports[3]), vec!["team-y"]);
    assert_eq!(stack_ids(&reports[5]), vec!["team-y"]);
    assert!(stack_ids(&reports[6]).is_empty());
    assert_eq!(stack_ids(&reports[7]), vec!["board-b"]);
    // close-all affordance is hidden with a single drawer
    assert_eq!(stack_ids(&reports[8]), vec!["board-b"]);
}

#[test]
fn test_report_serializes_to_json() {
    let reports = run("steps:\n  - { action: open, type: note, entityId: n }\n");
    let json = serde_json::to_value(&reports[0]).unwrap();

    assert_eq!(json["step"], "open note n");
    assert_eq!(json["panels"][0]["z_index"], 1200);
}
