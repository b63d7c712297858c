// Copyright 2026 the Gridscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce over host-supplied timestamps.
//!
//! The host owns the clock. Timestamps are plain [`Duration`]s measured from
//! any fixed, monotonic origin (frame time, `Instant::elapsed`, a test counter).
//!
//! ```
//! use core::time::Duration;
//! use gridscope_view2d::Debouncer;
//!
//! let ms = Duration::from_millis;
//! let mut d = Debouncer::new(ms(16));
//! d.schedule("a", ms(0));
//! d.schedule("b", ms(10));
//! assert_eq!(d.poll(ms(20)), None);
//! assert_eq!(d.next_deadline(), Some(ms(26)));
//! assert_eq!(d.poll(ms(26)), Some("b"));
//! assert_eq!(d.poll(ms(40)), None);
//! ```

use core::time::Duration;

/// Holds at most one pending value until `delay` has passed without a newer one.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Duration)>,
}

impl<T> Debouncer<T> {
    /// Creates an idle debouncer.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Quiet period required before a value is released.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value with `value`, due at `now + delay`.
    pub fn schedule(&mut self, value: T, now: Duration) {
        let deadline = now.saturating_add(self.delay);
        self.pending = Some((value, deadline));
    }

    /// Releases the pending value if its deadline is at or before `now`.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if deadline <= now => {
                let (value, _) = self.pending.take()?;
                log::trace!("debounce fired at {now:?}");
                Some(value)
            }
            _ => None,
        }
    }

    /// Releases the pending value immediately, regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// When the pending value becomes due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns `true` if a value is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
