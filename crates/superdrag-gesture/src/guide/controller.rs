use std::time::{Duration, Instant};

use superdrag_common::Point;
use superdrag_config::SuperdragConfig;
use tracing::debug;

use super::GuideOverlay;
use crate::host::HostSurface;

/// Delay between pointer release and reading the settled selection.
pub const GUIDE_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy)]
struct PendingShow {
    due: Instant,
    pointer: Point,
}

/// Visibility of the single guide overlay.
///
/// Shows are scheduled on pointer release and fire from [`poll`](Self::poll)
/// once [`GUIDE_DELAY`] has passed. A newer release replaces a pending show.
#[derive(Debug, Default)]
pub struct GuideController {
    overlay: Option<GuideOverlay>,
    manually_hidden: bool,
    pending: Option<PendingShow>,
}

impl GuideController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay(&self) -> Option<&GuideOverlay> {
        self.overlay.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn is_manually_hidden(&self) -> bool {
        self.manually_hidden
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule a show after the pointer is released at `point`.
    pub fn on_pointer_up(&mut self, point: Point, now: Instant) {
        if self.manually_hidden {
            return;
        }
        self.pending = Some(PendingShow {
            due: now + GUIDE_DELAY,
            pointer: point,
        });
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Fire a due show. Returns `true` if an overlay was drawn.
    pub fn poll(
        &mut self,
        now: Instant,
        gesture_active: bool,
        config: &SuperdragConfig,
        surface: &mut dyn HostSurface,
    ) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if now < pending.due {
            return false;
        }
        self.pending = None;

        if gesture_active || self.manually_hidden || !config.enable_guides {
            return false;
        }
        let selection = surface.selection();
        if selection.is_empty() {
            return false;
        }

        let anchor = selection
            .bounds
            .map(|b| b.center())
            .unwrap_or(pending.pointer);
        self.show(anchor, config, surface);
        true
    }

    fn show(&mut self, anchor: Point, config: &SuperdragConfig, surface: &mut dyn HostSurface) {
        if self.overlay.take().is_some() {
            surface.hide_guide();
        }
        let overlay = GuideOverlay::build(anchor, config);
        debug!(
            x = anchor.x,
            y = anchor.y,
            labels = overlay.labels.len(),
            "showing guide"
        );
        surface.show_guide(&overlay);
        self.overlay = Some(overlay);
    }

    /// Remove the overlay without touching the manual-dismiss flag.
    pub fn hide(&mut self, surface: &mut dyn HostSurface) {
        if self.overlay.take().is_some() {
            surface.hide_guide();
        }
    }

    /// Close affordance, Escape, or a label activation. Suppresses
    /// re-display until the selection is cleared.
    pub fn dismiss_manually(&mut self, surface: &mut dyn HostSurface) {
        self.manually_hidden = true;
        self.pending = None;
        self.hide(surface);
    }

    pub fn on_selection_cleared(&mut self, surface: &mut dyn HostSurface) {
        self.manually_hidden = false;
        self.hide(surface);
    }

    /// Redraw a visible overlay after a settings change.
    pub fn refresh(&mut self, config: &SuperdragConfig, surface: &mut dyn HostSurface) {
        let Some(anchor) = self.overlay.as_ref().map(|o| o.anchor) else {
            return;
        };
        if config.enable_guides {
            self.show(anchor, config, surface);
        } else {
            self.hide(surface);
        }
    }
}
