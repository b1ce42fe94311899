//! The per-gesture state machine: Idle, then Dragging once a drag begins on
//! something with payload text, then Idle again on drop or cancel.

use std::time::{Duration, Instant};

use superdrag_common::{ActionId, Direction, MagnitudeBand, Point};
use superdrag_config::SuperdragConfig;
use tracing::{debug, trace};

use crate::element::Element;
use crate::geometry::{classify_direction, distance};
use crate::resolver::{magnitude_band, resolve_action, settings_key};

/// Drag-clicks on links and buttons shorter than this are treated as clicks.
pub const MIN_DRAG_DURATION: Duration = Duration::from_millis(150);

/// State captured while a gesture is in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureState {
    pub origin: Point,
    pub direction: Option<Direction>,
    pub started_at: Instant,
    pub has_text_selection: bool,
    pub origin_is_interactive: bool,
    /// Selected text, or the origin's link target when nothing was selected.
    pub payload: String,
}

/// A drop as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropEvent {
    pub point: Point,
    /// The dragged data carries files.
    pub has_files: bool,
    pub at: Instant,
}

/// A gesture that resolved to an action.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGesture {
    pub action: ActionId,
    pub text: String,
    pub point: Point,
    pub direction: Direction,
    pub band: MagnitudeBand,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// No gesture was in progress.
    NotDragging,
    /// A file drop; left to the host.
    FileDrop,
    /// A fast drag-click on an interactive element.
    AccidentalClick,
    /// The pointer never moved far enough to pick a direction.
    Unresolved,
    Resolved(ResolvedGesture),
}

impl DropOutcome {
    /// Whether the host should suppress its own drop handling.
    pub fn prevents_default(&self) -> bool {
        matches!(self, DropOutcome::Unresolved | DropOutcome::Resolved(_))
    }
}

/// Owner of the single in-progress gesture.
#[derive(Debug, Default)]
pub struct GestureMachine {
    state: Option<GestureState>,
}

impl GestureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    /// Start a gesture at `point` on `target`.
    ///
    /// `selection` is the live selection text at this instant. Returns `false`
    /// and stays Idle when the target is input-like or there is no payload.
    /// Any gesture already in progress is discarded either way.
    pub fn begin(
        &mut self,
        point: Point,
        target: &Element,
        selection: &str,
        at: Instant,
    ) -> bool {
        self.state = None;

        if target.is_input_like() {
            trace!("drag started on an input element");
            return false;
        }

        let has_text_selection = !selection.is_empty();
        let payload = if has_text_selection {
            selection.to_owned()
        } else {
            match target.link_target() {
                Some(href) => href.to_owned(),
                None => return false,
            }
        };

        let origin_is_interactive = target.is_interactive();
        debug!(
            x = point.x,
            y = point.y,
            has_text_selection,
            origin_is_interactive,
            "gesture started"
        );
        self.state = Some(GestureState {
            origin: point,
            direction: None,
            started_at: at,
            has_text_selection,
            origin_is_interactive,
            payload,
        });
        true
    }

    /// Track the pointer. Returns `true` while a gesture is in progress, in
    /// which case the host should treat the drag as a move.
    pub fn update(&mut self, point: Point) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        state.direction = classify_direction(state.origin, point);
        true
    }

    /// Abandon the gesture without an action.
    pub fn cancel(&mut self) {
        if self.state.take().is_some() {
            debug!("gesture cancelled");
        }
    }

    /// Finish the gesture. The machine is Idle again when this returns,
    /// before the caller acts on the outcome.
    pub fn complete(&mut self, drop: &DropEvent, config: &SuperdragConfig) -> DropOutcome {
        let Some(state) = self.state.take() else {
            return DropOutcome::NotDragging;
        };

        if drop.has_files {
            debug!("file drop, ignoring gesture");
            return DropOutcome::FileDrop;
        }

        let elapsed = drop.at.saturating_duration_since(state.started_at);
        if !state.has_text_selection && state.origin_is_interactive && elapsed < MIN_DRAG_DURATION
        {
            debug!(elapsed_ms = elapsed.as_millis() as u64, "accidental drag-click");
            return DropOutcome::AccidentalClick;
        }

        let Some(direction) = state.direction else {
            return DropOutcome::Unresolved;
        };

        let band = magnitude_band(config, direction, distance(state.origin, drop.point));
        let action = resolve_action(settings_key(direction, band), config);
        debug!(?direction, ?band, action = %action, "gesture resolved");
        DropOutcome::Resolved(ResolvedGesture {
            action,
            text: state.payload,
            point: drop.point,
            direction,
            band,
        })
    }
}
