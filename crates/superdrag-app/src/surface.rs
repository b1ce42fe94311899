//! A surface with no screen: selection is set by the script, drawing goes
//! to the log.

use std::time::Instant;

use superdrag_common::{Toast, ToastQueue};
use superdrag_gesture::{GuideOverlay, HostSurface, Selection};
use tracing::info;

#[derive(Debug, Default)]
pub struct LoggingSurface {
    selection: Selection,
    guide_visible: bool,
    toasts: ToastQueue,
}

impl LoggingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn guide_visible(&self) -> bool {
        self.guide_visible
    }

    pub fn visible_toasts(&mut self, now: Instant) -> usize {
        self.toasts.visible(now).len()
    }
}

impl HostSurface for LoggingSurface {
    fn selection(&self) -> Selection {
        self.selection.clone()
    }

    fn show_guide(&mut self, overlay: &GuideOverlay) {
        self.guide_visible = true;
        let labels: Vec<String> = overlay
            .labels
            .iter()
            .map(|l| format!("{:?}{}: {}", l.direction, if l.is_far() { " far" } else { "" }, l.text()))
            .collect();
        info!(
            x = overlay.anchor.x,
            y = overlay.anchor.y,
            labels = %labels.join(", "),
            "guide shown"
        );
    }

    fn hide_guide(&mut self) {
        self.guide_visible = false;
        info!("guide hidden");
    }

    fn show_toast(&mut self, toast: &Toast) {
        info!(x = toast.anchor.x, y = toast.anchor.y, text = %toast.text, "toast");
        self.toasts.push(toast.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use superdrag_common::Point;

    #[test]
    fn copy_toast_expires() {
        let mut surface = LoggingSurface::new();
        let now = Instant::now();
        surface.show_toast(&Toast::copied(Point::new(10.0, 20.0), now));

        assert_eq!(surface.visible_toasts(now + Duration::from_millis(100)), 1);
        assert_eq!(surface.visible_toasts(now + Duration::from_millis(300)), 0);
    }

    #[test]
    fn guide_visibility_follows_show_and_hide() {
        let mut surface = LoggingSurface::new();
        surface.set_selection(Selection::new("hi"));
        assert_eq!(surface.selection().text, "hi");

        assert!(!surface.guide_visible());
        surface.hide_guide();
        assert!(!surface.guide_visible());
    }
}
