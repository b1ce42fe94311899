//! File watcher for settings edits made outside this process.
//!
//! Uses the `notify` crate and coalesces bursts of events inside a
//! 500 ms window so an editor's write-then-rename save reloads once.

mod config_watcher;

#[cfg(test)]
mod tests;

pub use config_watcher::{ConfigWatcher, DEBOUNCE};
