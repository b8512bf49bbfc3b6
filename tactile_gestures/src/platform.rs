// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities the engine consumes.
//!
//! The engine does not talk to a display environment directly. It reads time,
//! the user-agent string, and a single-shot timer through [`Platform`], and
//! emits synthetic signals through [`SignalEmitter`]. Splitting the two keeps
//! the emitter a small seam of its own: the state machine can be driven in
//! tests with nothing but a clock, and synthetic dispatch can be pointed at a
//! real surface, a recorder, or nowhere at all.

use tactile_binding::SyntheticSignal;

/// Sink for synthetic signals the engine produces when taps resolve.
pub trait SignalEmitter {
    /// Delivers a synthetic signal; `false` when a consumer cancelled it.
    fn emit_signal(&mut self, signal: &SyntheticSignal) -> bool;
}

/// Ambient host services: a clock, the user-agent string, and one
/// single-shot deferred timer.
pub trait Platform {
    /// Current time in milliseconds. Only differences matter; any monotonic
    /// origin works.
    fn now_ms(&self) -> u64;

    /// The host's user-agent string, used for platform-quirk detection.
    fn user_agent(&self) -> &str;

    /// Asks the host to call back (via the tracker's timer entry point) at
    /// `deadline_ms`. Replaces any pending request: at most one timer is
    /// outstanding, and a replaced request must not fire.
    fn arm_tap_timer(&mut self, deadline_ms: u64);

    /// Withdraws a pending timer request, if any.
    fn cancel_tap_timer(&mut self);
}

impl<E: SignalEmitter + ?Sized> SignalEmitter for &mut E {
    fn emit_signal(&mut self, signal: &SyntheticSignal) -> bool {
        (**self).emit_signal(signal)
    }
}

impl<P: Platform + ?Sized> Platform for &mut P {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn user_agent(&self) -> &str {
        (**self).user_agent()
    }

    fn arm_tap_timer(&mut self, deadline_ms: u64) {
        (**self).arm_tap_timer(deadline_ms);
    }

    fn cancel_tap_timer(&mut self) {
        (**self).cancel_tap_timer();
    }
}
