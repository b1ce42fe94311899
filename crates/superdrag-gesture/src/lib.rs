//! Drag-gesture recognition and action dispatch.
//!
//! A [`SuperDrag`] controller is created per embedding surface. The host
//! feeds it [`HostEvent`]s in order and calls [`SuperDrag::tick`] so the
//! guide's display timer can fire. Everything runs on the caller's thread;
//! the only hand-offs leave through the clipboard backend and the
//! [`ActionSink`].

pub mod controller;
pub mod element;
pub mod executor;
pub mod geometry;
pub mod gesture;
pub mod guide;
pub mod host;
pub mod resolver;

pub use controller::{HostEvent, Outcome, SuperDrag};
pub use element::Element;
pub use executor::{ActionExecutor, ActionSink, Execution};
pub use geometry::{classify_direction, distance};
pub use gesture::{DropEvent, DropOutcome, GestureMachine, GestureState, ResolvedGesture};
pub use guide::{GuideController, GuideHit, GuideLabel, GuideOverlay};
pub use host::{HostSurface, Selection};
pub use resolver::{magnitude_band, resolve_action, settings_key};
