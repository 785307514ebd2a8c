//! Fixed-window rate limiter.

use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Per-key counter for the current window.
#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window rate limiter keyed by client identity.
///
/// Counters live in a [`DashMap`]; increment-and-compare happens under
/// the shard lock, which is all the atomicity the contract requires.
/// Expired windows are reset in place on the next request for the key.
#[derive(Debug)]
pub struct FixedWindowLimiter {
    max: u32,
    window: Duration,
    windows: DashMap<String, Window>,
}

impl FixedWindowLimiter {
    /// Create a limiter allowing `max` requests per `window` per key.
    #[must_use]
    pub fn new(max: u32, window: Duration) -> Self {
        Self {
            max,
            window,
            windows: DashMap::new(),
        }
    }

    /// Record a request for `key`; returns whether it is within the
    /// window's budget.
    pub fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut entry = self
            .windows
            .entry(key.to_string())
            .or_insert_with(|| Window {
                started: now,
                count: 0,
            });

        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }

        entry.count += 1;
        entry.count <= self.max
    }
}
