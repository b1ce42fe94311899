//! [`SuperDrag`] owns every piece of per-surface state and routes host
//! events to the gesture machine, the guide and the executor.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use superdrag_common::{ConfigChange, Point};
use superdrag_config::ConfigCache;
use tracing::debug;

use crate::element::Element;
use crate::executor::{ActionExecutor, Execution};
use crate::gesture::{DropEvent, DropOutcome, GestureMachine};
use crate::guide::{GuideController, GuideHit};
use crate::host::HostSurface;

/// Events delivered by the host, in the order they happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostEvent {
    DragStart {
        point: Point,
        #[serde(default)]
        target: Element,
    },
    DragOver {
        point: Point,
    },
    /// Drag ended without a drop, including leaving the document.
    DragEnd,
    Drop {
        point: Point,
        #[serde(default)]
        has_files: bool,
    },
    PointerDown {
        point: Point,
    },
    PointerUp {
        point: Point,
    },
    SelectionChange,
    KeyDown {
        key: String,
    },
    /// The host hit-tested the close affordance itself.
    GuideClose,
    /// The host hit-tested a guide label itself.
    GuideLabel {
        index: usize,
    },
}

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Suppress the host's default handling of the event.
    pub prevent_default: bool,
    /// Set when the event executed an action.
    pub execution: Option<Execution>,
}

impl Outcome {
    fn prevented(prevent_default: bool) -> Self {
        Self {
            prevent_default,
            execution: None,
        }
    }

    fn executed(execution: Execution) -> Self {
        Self {
            prevent_default: true,
            execution: Some(execution),
        }
    }
}

pub struct SuperDrag<S: HostSurface> {
    config: ConfigCache,
    gesture: GestureMachine,
    guide: GuideController,
    executor: ActionExecutor,
    surface: S,
}

impl<S: HostSurface> SuperDrag<S> {
    pub fn new(config: ConfigCache, executor: ActionExecutor, surface: S) -> Self {
        Self {
            config,
            gesture: GestureMachine::new(),
            guide: GuideController::new(),
            executor,
            surface,
        }
    }

    pub fn config(&self) -> &ConfigCache {
        &self.config
    }

    pub fn gesture(&self) -> &GestureMachine {
        &self.gesture
    }

    pub fn guide(&self) -> &GuideController {
        &self.guide
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn handle(&mut self, event: HostEvent, now: Instant) -> Outcome {
        match event {
            HostEvent::DragStart { point, target } => {
                self.guide.cancel_pending();
                let selection = self.surface.selection();
                self.gesture.begin(point, &target, &selection.text, now);
                Outcome::default()
            }
            HostEvent::DragOver { point } => Outcome::prevented(self.gesture.update(point)),
            HostEvent::DragEnd => {
                self.gesture.cancel();
                Outcome::default()
            }
            HostEvent::Drop { point, has_files } => self.on_drop(point, has_files, now),
            HostEvent::PointerDown { point } => self.on_pointer_down(point, now),
            HostEvent::PointerUp { point } => {
                if !self.gesture.is_active() {
                    self.guide.on_pointer_up(point, now);
                }
                Outcome::default()
            }
            HostEvent::SelectionChange => {
                if !self.gesture.is_active() && self.surface.selection().text.is_empty() {
                    self.guide.on_selection_cleared(&mut self.surface);
                }
                Outcome::default()
            }
            HostEvent::KeyDown { key } => {
                if key == "Escape" {
                    self.guide.dismiss_manually(&mut self.surface);
                }
                Outcome::default()
            }
            HostEvent::GuideClose => {
                self.guide.dismiss_manually(&mut self.surface);
                Outcome::prevented(true)
            }
            HostEvent::GuideLabel { index } => self.activate_label(index, now),
        }
    }

    /// Advance timers. Returns `true` if a guide was shown.
    pub fn tick(&mut self, now: Instant) -> bool {
        let snapshot = self.config.snapshot();
        self.guide
            .poll(now, self.gesture.is_active(), &snapshot, &mut self.surface)
    }

    /// Apply one change-feed entry and redraw a visible guide.
    pub fn apply_config_change(&mut self, change: &ConfigChange) -> bool {
        if !self.config.apply(change) {
            return false;
        }
        let snapshot = self.config.snapshot();
        self.guide.refresh(&snapshot, &mut self.surface);
        true
    }

    fn on_drop(&mut self, point: Point, has_files: bool, now: Instant) -> Outcome {
        let snapshot = self.config.snapshot();
        let drop = DropEvent {
            point,
            has_files,
            at: now,
        };
        let outcome = self.gesture.complete(&drop, &snapshot);
        let prevent_default = outcome.prevents_default();
        let DropOutcome::Resolved(gesture) = outcome else {
            return Outcome::prevented(prevent_default);
        };
        let execution = self.executor.execute(
            gesture.action,
            &gesture.text,
            gesture.point,
            now,
            &mut self.surface,
        );
        Outcome::executed(execution)
    }

    fn on_pointer_down(&mut self, point: Point, now: Instant) -> Outcome {
        if self.gesture.is_active() {
            return Outcome::default();
        }
        match self.guide.overlay().and_then(|o| o.hit_test(point)) {
            Some(GuideHit::Close) => self.handle(HostEvent::GuideClose, now),
            Some(GuideHit::Label(index)) => self.activate_label(index, now),
            None => {
                if self.surface.selection().text.is_empty() {
                    self.guide.hide(&mut self.surface);
                }
                Outcome::default()
            }
        }
    }

    fn activate_label(&mut self, index: usize, now: Instant) -> Outcome {
        let Some((action, anchor)) = self
            .guide
            .overlay()
            .and_then(|o| o.label(index).map(|l| (l.action, o.anchor)))
        else {
            return Outcome::default();
        };
        self.guide.dismiss_manually(&mut self.surface);

        let selection = self.surface.selection();
        if selection.is_empty() {
            debug!("guide label activated without a selection");
            return Outcome::prevented(true);
        }
        let execution =
            self.executor
                .execute(action, &selection.text, anchor, now, &mut self.surface);
        Outcome::executed(execution)
    }
}
