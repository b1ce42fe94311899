//! Carries out a resolved action: nothing, a clipboard copy, or a hand-off
//! to the tab dispatcher.

use std::time::Instant;

use superdrag_common::{ActionId, DispatchError, DispatchMessage, Point, Toast};
use superdrag_platform::ClipboardBackend;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::host::HostSurface;

/// Fire-and-forget channel to the dispatcher.
pub trait ActionSink {
    fn send(&self, message: DispatchMessage) -> Result<(), DispatchError>;
}

impl ActionSink for mpsc::UnboundedSender<DispatchMessage> {
    fn send(&self, message: DispatchMessage) -> Result<(), DispatchError> {
        mpsc::UnboundedSender::send(self, message)
            .map_err(|_| DispatchError::Unreachable("dispatcher channel closed".into()))
    }
}

/// What [`ActionExecutor::execute`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Nothing,
    Copied,
    CopiedWithFallback,
    CopyFailed,
    Dispatched,
    DispatchFailed,
}

pub struct ActionExecutor {
    primary: Box<dyn ClipboardBackend>,
    fallback: Option<Box<dyn ClipboardBackend>>,
    sink: Box<dyn ActionSink>,
}

impl ActionExecutor {
    pub fn new(primary: Box<dyn ClipboardBackend>, sink: Box<dyn ActionSink>) -> Self {
        Self {
            primary,
            fallback: None,
            sink,
        }
    }

    pub fn with_fallback(mut self, fallback: Box<dyn ClipboardBackend>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Perform `action` once. Failures are logged and reported in the
    /// returned [`Execution`]; they never propagate to the caller.
    pub fn execute(
        &mut self,
        action: ActionId,
        text: &str,
        point: Point,
        now: Instant,
        surface: &mut dyn HostSurface,
    ) -> Execution {
        match action {
            ActionId::None => Execution::Nothing,
            ActionId::Copy => {
                let outcome = self.copy(text);
                if matches!(outcome, Execution::Copied | Execution::CopiedWithFallback) {
                    surface.show_toast(&Toast::copied(point, now));
                }
                outcome
            }
            ActionId::OpenSearch(_) | ActionId::OpenTranslate(_) | ActionId::OpenAiChat(_) => {
                let Some(message) = DispatchMessage::for_action(action, text) else {
                    return Execution::Nothing;
                };
                match self.sink.send(message) {
                    Ok(()) => {
                        debug!(action = %action, "handed off to dispatcher");
                        Execution::Dispatched
                    }
                    Err(e) => {
                        warn!(action = %action, "dispatch failed: {e}");
                        Execution::DispatchFailed
                    }
                }
            }
        }
    }

    fn copy(&mut self, text: &str) -> Execution {
        let primary_err = match self.primary.write_text(text) {
            Ok(()) => return Execution::Copied,
            Err(e) => e,
        };
        warn!(backend = self.primary.name(), "clipboard write failed: {primary_err}");

        let Some(fallback) = self.fallback.as_mut() else {
            error!("copy failed and no fallback clipboard is configured");
            return Execution::CopyFailed;
        };
        match fallback.write_text(text) {
            Ok(()) => Execution::CopiedWithFallback,
            Err(e) => {
                error!(backend = fallback.name(), "fallback clipboard write failed: {e}");
                Execution::CopyFailed
            }
        }
    }
}
