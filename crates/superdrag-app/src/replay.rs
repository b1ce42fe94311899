//! Replaying recorded host events.
//!
//! A script is a JSON array of steps:
//!
//! ```json
//! [
//!   { "at_ms": 0, "selection": { "text": "hello world" },
//!     "event": { "kind": "drag_start", "point": { "x": 300, "y": 300 }, "target": { "tag": "p" } } },
//!   { "at_ms": 80, "event": { "kind": "drag_over", "point": { "x": 300, "y": 250 } } },
//!   { "at_ms": 200, "event": { "kind": "drop", "point": { "x": 300, "y": 250 } } }
//! ]
//! ```
//!
//! `at_ms` is measured from the start of the replay. `selection`, when
//! present, replaces the surface's selection before the event is delivered.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use superdrag_common::{ConfigChange, SuperdragError};
use superdrag_gesture::guide::GUIDE_DELAY;
use superdrag_gesture::{HostEvent, HostSurface, Selection, SuperDrag};
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::surface::LoggingSurface;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    #[serde(default)]
    pub at_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection>,
    pub event: HostEvent,
}

pub fn parse_script(raw: &str) -> Result<Vec<ScriptStep>, SuperdragError> {
    let mut steps: Vec<ScriptStep> = serde_json::from_str(raw)
        .map_err(|e| SuperdragError::Other(format!("invalid replay script: {e}")))?;
    steps.sort_by_key(|s| s.at_ms);
    Ok(steps)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, SuperdragError> {
    let raw = std::fs::read_to_string(path)?;
    parse_script(&raw)
}

/// Counts reported after a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub executions: usize,
    pub guides_shown: usize,
}

/// Deliver `steps` at their recorded offsets, applying settings changes
/// from `changes` between steps.
pub async fn run(
    steps: Vec<ScriptStep>,
    controller: &mut SuperDrag<LoggingSurface>,
    changes: &mut broadcast::Receiver<ConfigChange>,
) -> ReplaySummary {
    let start = Instant::now();
    let mut summary = ReplaySummary::default();

    for step in steps {
        let due = start + Duration::from_millis(step.at_ms);
        wait_until(due, controller, changes, &mut summary).await;

        if let Some(selection) = step.selection {
            controller.surface_mut().set_selection(selection);
        }
        debug!(at_ms = step.at_ms, event = ?step.event, "replaying");
        let outcome = controller.handle(step.event, Instant::now());
        summary.events += 1;
        if let Some(execution) = outcome.execution {
            info!(?execution, "action executed");
            summary.executions += 1;
        }
    }

    // Let a pending guide fire.
    let due = Instant::now() + GUIDE_DELAY;
    wait_until(due, controller, changes, &mut summary).await;
    summary
}

async fn wait_until<S: HostSurface>(
    due: Instant,
    controller: &mut SuperDrag<S>,
    changes: &mut broadcast::Receiver<ConfigChange>,
    summary: &mut ReplaySummary,
) {
    loop {
        while let Ok(change) = changes.try_recv() {
            controller.apply_config_change(&change);
        }
        let now = Instant::now();
        if controller.tick(now) {
            summary.guides_shown += 1;
        }
        if now >= due {
            break;
        }
        tokio::time::sleep((due - now).min(Duration::from_millis(5))).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use superdrag_common::{DispatchMessage, EventBus, PlatformError};
    use superdrag_config::{ConfigCache, SuperdragConfig};
    use superdrag_gesture::ActionExecutor;
    use superdrag_platform::ClipboardBackend;
    use tokio::sync::mpsc;

    struct NullClipboard;

    impl ClipboardBackend for NullClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), PlatformError> {
            Ok(())
        }

        fn name(&self) -> &'static str {
            "null"
        }
    }

    const SCRIPT: &str = r#"[
        { "at_ms": 30, "event": { "kind": "drop", "point": { "x": 300, "y": 250 } } },
        { "at_ms": 0, "selection": { "text": "hello world" },
          "event": { "kind": "drag_start", "point": { "x": 300, "y": 300 }, "target": { "tag": "p" } } },
        { "at_ms": 10, "event": { "kind": "drag_over", "point": { "x": 300, "y": 250 } } },
        { "at_ms": 40, "event": { "kind": "pointer_up", "point": { "x": 300, "y": 250 } } }
    ]"#;

    #[test]
    fn steps_are_ordered_by_offset() {
        let steps = parse_script(SCRIPT).unwrap();
        let offsets: Vec<u64> = steps.iter().map(|s| s.at_ms).collect();
        assert_eq!(offsets, vec![0, 10, 30, 40]);
        assert_eq!(steps[0].selection.as_ref().unwrap().text, "hello world");
    }

    #[test]
    fn malformed_script_is_an_error() {
        assert!(parse_script(r#"[{"event": {"kind": "fly"}}]"#).is_err());
    }

    #[tokio::test]
    async fn replay_dispatches_and_shows_guide() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let executor = ActionExecutor::new(Box::new(NullClipboard), Box::new(tx));
        let mut controller = SuperDrag::new(
            ConfigCache::new(SuperdragConfig::default()),
            executor,
            LoggingSurface::new(),
        );
        let bus = EventBus::default();
        let mut changes = bus.subscribe();

        let summary = run(parse_script(SCRIPT).unwrap(), &mut controller, &mut changes).await;

        assert_eq!(summary.events, 4);
        assert_eq!(summary.executions, 1);
        assert_eq!(summary.guides_shown, 1);
        assert!(controller.surface().guide_visible());
        assert_eq!(
            rx.try_recv().unwrap(),
            DispatchMessage::Search {
                engine_id: "google".into(),
                text: "hello world".into(),
            }
        );
    }

    #[tokio::test]
    async fn replay_applies_settings_changes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let executor = ActionExecutor::new(Box::new(NullClipboard), Box::new(tx));
        let mut controller = SuperDrag::new(
            ConfigCache::default(),
            executor,
            LoggingSurface::new(),
        );
        let bus = EventBus::default();
        let mut changes = bus.subscribe();
        bus.publish(ConfigChange::new("up", "gemini"));

        run(parse_script(SCRIPT).unwrap(), &mut controller, &mut changes).await;

        assert_eq!(
            rx.try_recv().unwrap(),
            DispatchMessage::Search {
                engine_id: "gemini".into(),
                text: "hello world".into(),
            }
        );
    }
}
