// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_gestures --heading-base-level=0

//! Tactile Gestures: gesture recognition over raw pointer/touch signals.
//!
//! One engine instance watches one display surface and converts its raw
//! start/move/end signals into a stream of named gesture events: `start`,
//! `moveStart`, `moving`, `moveEnd`, `end`, `tap`, `dblTap`, `mltTap`,
//! `press`, and four directional swipes. Handlers subscribe through an
//! ordered registry; returning [`Outcome::Cancel`] from a handler vetoes the
//! rest of that dispatch and, for the events that gate classification,
//! short-circuits the engine's default behavior (a vetoed `moveEnd` stops
//! swipe classification, a vetoed `tap` stops the synthetic click, and so
//! on).
//!
//! ## Layers
//!
//! - [`GestureEngine`] is the core state machine. It never touches a
//!   surface: signals are pushed in, ambient services (clock, user agent,
//!   one deferred timer) come from a [`Platform`], and synthetic click/tap
//!   signals leave through a [`SignalEmitter`]. This keeps classification
//!   fully testable without a display environment.
//! - [`GestureTracker`] wires an engine to a [`Surface`](tactile_binding::Surface):
//!   it binds the native signal groups, adds document-level capture for
//!   mouse drags, emits synthetics at the bound surface, and tears
//!   everything down on [`destroy`](GestureTracker::destroy).
//!
//! ## Classification at a glance
//!
//! A contact that never exceeds the movement threshold (5 px per axis) is a
//! tap-or-press candidate: held longer than 200 ms it is a `press`,
//! otherwise classification waits out a 200 ms quiet window so quick
//! follow-up taps can upgrade it to `dblTap` (two) or `mltTap` (three or
//! more). A moved release fires `moveEnd` and then checks for a swipe: the
//! dominant axis must exceed 50 px while the cross axis stays under 20 px.
//! Every release ends with `end` unless a handler vetoed the chain earlier.
//!
//! ## Minimal example
//!
//! Driving the engine directly with a toy platform:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use tactile_binding::{RawSignal, SyntheticSignal};
//! use tactile_gestures::{
//!     GestureEngine, GestureEvent, Outcome, Platform, SignalEmitter, handler,
//! };
//!
//! struct Host {
//!     now: u64,
//!     armed: Option<u64>,
//! }
//!
//! impl Platform for Host {
//!     fn now_ms(&self) -> u64 {
//!         self.now
//!     }
//!     fn user_agent(&self) -> &str {
//!         "doctest"
//!     }
//!     fn arm_tap_timer(&mut self, deadline_ms: u64) {
//!         self.armed = Some(deadline_ms);
//!     }
//!     fn cancel_tap_timer(&mut self) {
//!         self.armed = None;
//!     }
//! }
//!
//! impl SignalEmitter for Host {
//!     fn emit_signal(&mut self, _signal: &SyntheticSignal) -> bool {
//!         true
//!     }
//! }
//!
//! let mut host = Host { now: 0, armed: None };
//! let mut engine = GestureEngine::new();
//!
//! let taps = Rc::new(RefCell::new(0));
//! let seen = Rc::clone(&taps);
//! engine.on(
//!     GestureEvent::Tap,
//!     handler(move |_context, _contact| {
//!         *seen.borrow_mut() += 1;
//!         Outcome::Continue
//!     }),
//! );
//!
//! // Touch down and release quickly, without moving.
//! let down = RawSignal::new("touchstart", Point::ZERO)
//!     .with_changed_points([Point::new(40.0, 40.0)]);
//! engine.handle_start(&mut host, &down);
//!
//! host.now = 80;
//! let up = RawSignal::new("touchend", Point::ZERO)
//!     .with_changed_points([Point::new(41.0, 40.0)]);
//! engine.handle_end(&mut host, &up);
//!
//! // The quiet window the engine asked for elapses: the release is a tap.
//! let deadline = host.armed.expect("a tap window should be pending");
//! host.now = deadline;
//! engine.handle_timer(&mut host, deadline);
//!
//! assert_eq!(*taps.borrow(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod events;
mod platform;
pub mod trace;
mod tracker;

pub use config::GestureConfig;
pub use engine::{
    Contact, GestureContext, GestureEngine, GestureHandler, InputMode, handler, normalized,
};
pub use events::GestureEvent;
pub use platform::{Platform, SignalEmitter};
pub use tracker::GestureTracker;

pub use tactile_listeners::Outcome;

/// Native name of the mouse start signal.
pub const MOUSE_DOWN: &str = "mousedown";
/// Native name of the mouse move signal (document capture during drags).
pub const MOUSE_MOVE: &str = "mousemove";
/// Native name of the mouse end signal.
pub const MOUSE_UP: &str = "mouseup";

/// The start signal group a tracker binds on its surface.
pub const START_SIGNALS: &str = "touchstart mousedown";
/// The move signal group a tracker binds on its surface.
pub const MOVE_SIGNALS: &str = "touchmove";
/// The end signal group a tracker binds on its surface.
pub const END_SIGNALS: &str = "touchend touchcancel";

/// Synthetic signal re-dispatched for a single tap in touch sessions.
pub const SYNTHETIC_CLICK: &str = "click";
/// Synthetic signal re-dispatched for a double tap in touch sessions.
pub const SYNTHETIC_DBL_CLICK: &str = "dblclick";
/// Synthetic signal re-dispatched for a single tap in any session.
pub const SYNTHETIC_TAP: &str = "tap";
/// Synthetic signal re-dispatched for a double tap in any session.
pub const SYNTHETIC_DBL_TAP: &str = "dbltap";
