//! Tab dispatcher for superdrag.
//!
//! Consumes [`DispatchMessage`](superdrag_common::DispatchMessage)s:
//! searches and translations open a templated URL next to the active tab,
//! AI services open their chat page and have the prompt filled in.

pub mod ai;
pub mod autofill;
pub mod dispatcher;
pub mod tabs;
pub mod templates;

pub use ai::{chat_target, ChatTarget};
pub use autofill::{fill_script, AutofillPolicy};
pub use dispatcher::{Dispatcher, Handled};
pub use tabs::{TabHost, TabId};
