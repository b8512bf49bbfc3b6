// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The manual clock/timer platform.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::Cell;
use core::fmt;

use tactile_binding::Surface;
use tactile_gestures::{GestureTracker, Platform};

struct PlatformInner {
    now: Cell<u64>,
    user_agent: String,
    armed: Cell<Option<u64>>,
}

/// A [`Platform`] with a manually driven clock.
///
/// Clones are handles to the same platform, so a test can keep driving the
/// clock of the instance it moved into a tracker. The tap timer is a single
/// recorded deadline with replace semantics; the driver decides when to act
/// on it (usually through [`run_pending_timer`]).
#[derive(Clone)]
pub struct ManualPlatform {
    inner: Rc<PlatformInner>,
}

impl Default for ManualPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualPlatform {
    /// Creates a platform at time zero with a neutral user agent.
    #[must_use]
    pub fn new() -> Self {
        Self::with_user_agent("TactileHostRef/1.0")
    }

    /// Creates a platform reporting the given user-agent string.
    #[must_use]
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(PlatformInner {
                now: Cell::new(0),
                user_agent: user_agent.into(),
                armed: Cell::new(None),
            }),
        }
    }

    /// The current clock value in milliseconds.
    pub fn now(&self) -> u64 {
        self.inner.now.get()
    }

    /// Sets the clock.
    pub fn set_now(&self, now_ms: u64) {
        self.inner.now.set(now_ms);
    }

    /// Advances the clock by `ms`.
    pub fn advance(&self, ms: u64) {
        self.inner.now.set(self.inner.now.get() + ms);
    }

    /// The deadline of the armed tap timer, if one is pending.
    pub fn armed_deadline(&self) -> Option<u64> {
        self.inner.armed.get()
    }

    /// Clears and returns the armed deadline when the clock has reached it.
    pub fn take_due(&self) -> Option<u64> {
        let deadline = self.inner.armed.get()?;
        if self.now() < deadline {
            return None;
        }
        self.inner.armed.set(None);
        Some(deadline)
    }
}

impl Platform for ManualPlatform {
    fn now_ms(&self) -> u64 {
        self.inner.now.get()
    }

    fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    fn arm_tap_timer(&mut self, deadline_ms: u64) {
        self.inner.armed.set(Some(deadline_ms));
    }

    fn cancel_tap_timer(&mut self) {
        self.inner.armed.set(None);
    }
}

impl fmt::Debug for ManualPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualPlatform")
            .field("now", &self.inner.now.get())
            .field("armed", &self.inner.armed.get())
            .field("user_agent", &self.inner.user_agent)
            .finish()
    }
}

/// Runs a tracker's pending tap timer when its deadline has passed.
///
/// Returns whether the timer fired. Mirrors what an event-loop host does:
/// when the deadline it was asked to watch elapses, it clears the request
/// and calls the tracker's timer entry point.
pub fn run_pending_timer<S: Surface + 'static>(
    platform: &ManualPlatform,
    tracker: &GestureTracker<S, ManualPlatform>,
) -> bool {
    match platform.take_due() {
        Some(_deadline) => {
            tracker.handle_timer(platform.now());
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_shared_across_clones() {
        let platform = ManualPlatform::new();
        let clone = platform.clone();
        platform.advance(150);
        assert_eq!(clone.now(), 150);
    }

    #[test]
    fn arming_replaces_the_previous_deadline() {
        let mut platform = ManualPlatform::new();
        platform.arm_tap_timer(200);
        platform.arm_tap_timer(350);
        assert_eq!(platform.armed_deadline(), Some(350));

        platform.cancel_tap_timer();
        assert_eq!(platform.armed_deadline(), None);
    }

    #[test]
    fn take_due_waits_for_the_deadline() {
        let mut platform = ManualPlatform::new();
        platform.arm_tap_timer(200);

        platform.set_now(199);
        assert_eq!(platform.take_due(), None);

        platform.set_now(200);
        assert_eq!(platform.take_due(), Some(200));
        // The slot is cleared after firing.
        assert_eq!(platform.take_due(), None);
    }
}
