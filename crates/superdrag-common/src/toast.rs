use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::types::Point;

/// Lifetime of the copy confirmation toast.
pub const TOAST_TTL: Duration = Duration::from_millis(250);

/// A short-lived confirmation drawn at a viewport point.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub text: String,
    pub anchor: Point,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    /// The confirmation shown after a successful copy.
    pub fn copied(anchor: Point, now: Instant) -> Self {
        Self {
            text: "COPY".to_owned(),
            anchor,
            created_at: now,
            ttl: TOAST_TTL,
        }
    }

    /// Returns `true` once the toast has outlived its TTL at `now`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }
}

/// A bounded queue of toasts that evicts expired entries.
#[derive(Debug)]
pub struct ToastQueue {
    items: VecDeque<Toast>,
    capacity: usize,
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a toast, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, toast: Toast) {
        let now = toast.created_at;
        self.evict_expired(now);
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(toast);
    }

    /// Returns the toasts still visible at `now`.
    pub fn visible(&mut self, now: Instant) -> Vec<&Toast> {
        self.evict_expired(now);
        self.items.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn evict_expired(&mut self, now: Instant) {
        self.items.retain(|t| !t.is_expired_at(now));
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(8)
    }
}
