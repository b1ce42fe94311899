//! What the gesture core needs from the surface it is embedded in.

use serde::{Deserialize, Serialize};
use superdrag_common::{Rect, Toast};

use crate::guide::GuideOverlay;

/// The live text selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub text: String,
    /// Bounding box of the selected range, when the host can measure it.
    #[serde(default)]
    pub bounds: Option<Rect>,
}

impl Selection {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Whitespace-only selections count as empty.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Rendering and selection access provided by the embedding surface.
///
/// Overlays and toasts are drawn above all page content and only take
/// pointer input on their own labels and close affordance.
pub trait HostSurface {
    fn selection(&self) -> Selection;

    fn show_guide(&mut self, overlay: &GuideOverlay);

    fn hide_guide(&mut self);

    fn show_toast(&mut self, toast: &Toast);
}
