// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.
//!
//! [`GestureEngine`] is pure with respect to the host environment: raw
//! signals are pushed in through [`handle_start`](GestureEngine::handle_start),
//! [`handle_move`](GestureEngine::handle_move),
//! [`handle_end`](GestureEngine::handle_end) and
//! [`handle_timer`](GestureEngine::handle_timer), ambient services come in
//! through [`Platform`]/[`SignalEmitter`], and recognized gestures go out
//! through the listener registry. Wiring the engine to an actual surface is
//! [`GestureTracker`](crate::GestureTracker)'s job.
//!
//! ## States
//!
//! The machine is explicit: `Idle` until a start signal, then `Tracking` a
//! current-gesture record whose motion advances from `Still` to `Moving`
//! when a contact exceeds the movement threshold. Veto sentinels returned by
//! handlers are folded into `Motion` as well, so "this gesture stopped
//! reporting moves" is a state, not a flag combination. A pending tap window
//! lives beside the phase: it spans gestures, because a double tap is two
//! complete press/release pairs inside overlapping windows.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;
use core::mem;

use kurbo::{Point, Vec2};
use tactile_binding::{RawSignal, SyntheticSignal};
use tactile_listeners::{Listeners, Outcome};

use crate::config::GestureConfig;
use crate::events::GestureEvent;
use crate::platform::{Platform, SignalEmitter};
use crate::trace::{GestureTrace, PhaseKind};
use crate::{MOUSE_DOWN, SYNTHETIC_CLICK, SYNTHETIC_DBL_CLICK, SYNTHETIC_DBL_TAP, SYNTHETIC_TAP};

/// User-agent fragment that selects the legacy default-prevention quirk:
/// Android 4.x mishandles unprevented touch defaults mid-gesture, so start
/// signals there are default-prevented unless mouse-originated.
const ANDROID_4_UA: &str = "Android 4.";

/// One normalized coordinate-bearing contact derived from a raw signal.
///
/// Touch- and mouse-shaped signals are unified here: the first changed
/// contact point when the signal carries a list, the signal's own position
/// otherwise. This is the payload every gesture handler receives.
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    /// Native name of the signal this contact came from.
    pub name: String,
    /// The contact's position.
    pub position: Point,
}

/// Normalizes a raw signal into a [`Contact`], optionally consuming the
/// signal's default-prevention and propagation-stop capabilities first.
pub fn normalized(signal: &RawSignal, prevent_default: bool, stop_propagation: bool) -> Contact {
    if prevent_default {
        signal.prevent_default();
    }
    if stop_propagation {
        signal.stop_propagation();
    }
    let position = signal
        .changed_points()
        .first()
        .copied()
        .unwrap_or_else(|| signal.position());
    Contact {
        name: String::from(signal.name()),
        position,
    }
}

/// The input mode an engine instance has settled on.
///
/// Starts as [`Touch`](Self::Touch); the first mouse-originated start signal
/// flips it to [`Mouse`](Self::Mouse) for the rest of the instance's life.
/// Hosts that deliver both kinds of signal settle on whichever arrives first
/// from a mouse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Touch-driven session; taps re-dispatch a synthetic click.
    Touch,
    /// Mouse-driven session; the host produces real clicks itself.
    Mouse,
}

/// Read-only snapshot of engine state handed to every gesture handler.
#[derive(Clone, Copy, Debug)]
pub struct GestureContext {
    /// Displacement from the gesture origin, as of the latest move or
    /// move-end. Persists until the next movement overwrites it.
    pub displacement: Option<Vec2>,
    /// Accumulated tap count; set when a multi-tap classification fires.
    pub tap_count: Option<u32>,
    /// The instance's input mode.
    pub input: InputMode,
}

/// The handler shape stored in the engine's registry.
pub type GestureHandler = dyn Fn(GestureContext, &Contact) -> Outcome;

/// Wraps a closure as a registrable gesture handler.
pub fn handler(f: impl Fn(GestureContext, &Contact) -> Outcome + 'static) -> Rc<GestureHandler> {
    Rc::new(f)
}

/// Movement progress of the current gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    /// Under the movement threshold so far.
    Still,
    /// `start` was vetoed; move signals are ignored for this gesture.
    Suppressed,
    /// `moveStart` was vetoed; remaining move signals are ignored, but the
    /// release still classifies as moved.
    MoveVetoed,
    /// Past the threshold; `moveStart` has fired.
    Moving {
        /// Displacement from the origin as of the latest move signal.
        delta: Vec2,
    },
}

/// The current-gesture record, present between a start signal and its
/// matching release.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Gesture {
    origin: Point,
    started_at_ms: u64,
    motion: Motion,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Tracking(Gesture),
}

/// Pending tap-classification sub-state. Survives individual gestures; at
/// most one window is pending per engine.
#[derive(Clone, Debug, PartialEq)]
struct TapWindow {
    count: u32,
    deadline_ms: u64,
    contact: Contact,
}

/// The stateful gesture classifier.
///
/// See the [module docs](self) for the state model and
/// [`GestureTracker`](crate::GestureTracker) for surface wiring.
pub struct GestureEngine {
    config: GestureConfig,
    listeners: Listeners<GestureEvent, GestureHandler>,
    input: InputMode,
    phase: Phase,
    taps: Option<TapWindow>,
    last_displacement: Option<Vec2>,
    last_tap_count: Option<u32>,
    trace: Option<Rc<RefCell<dyn GestureTrace>>>,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureEngine {
    /// Creates an engine with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// Creates an engine with the given thresholds.
    #[must_use]
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            listeners: Listeners::new(),
            input: InputMode::Touch,
            phase: Phase::Idle,
            taps: None,
            last_displacement: None,
            last_tap_count: None,
            trace: None,
        }
    }

    /// The thresholds in effect.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the thresholds. Takes effect from the next signal.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// The input mode the instance has settled on.
    pub fn input(&self) -> InputMode {
        self.input
    }

    /// Coarse summary of the engine's current phase.
    pub fn phase_kind(&self) -> PhaseKind {
        phase_kind_of(&self.phase)
    }

    /// Whether a gesture is currently in progress.
    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::Tracking(_))
    }

    /// Installs a trace sink observing transitions and dispatches.
    pub fn set_trace(&mut self, trace: Rc<RefCell<dyn GestureTrace>>) {
        self.trace = Some(trace);
    }

    /// Removes the trace sink, if any.
    pub fn clear_trace(&mut self) {
        self.trace = None;
    }

    /// Registers a handler for `event`; duplicates (same `Rc`) are ignored.
    pub fn on(&mut self, event: GestureEvent, handler: Rc<GestureHandler>) -> &mut Self {
        self.listeners.on(event, handler);
        self
    }

    /// Batch registration of `(event, handler)` entries in order.
    pub fn on_each(
        &mut self,
        entries: impl IntoIterator<Item = (GestureEvent, Rc<GestureHandler>)>,
    ) -> &mut Self {
        self.listeners.on_each(entries);
        self
    }

    /// Clears every handler for `event`.
    pub fn off(&mut self, event: GestureEvent) -> &mut Self {
        self.listeners.off(&event);
        self
    }

    /// Removes the first handler for `event` matching `handler` by identity.
    pub fn off_handler(&mut self, event: GestureEvent, handler: &Rc<GestureHandler>) -> &mut Self {
        self.listeners.off_handler(&event, handler);
        self
    }

    /// Dispatches `event` to its handlers in registration order.
    ///
    /// Each handler receives a [`GestureContext`] snapshot and the contact.
    /// The first [`Outcome::Cancel`] short-circuits the rest and is
    /// reported; `None` means no handler is registered (a no-op).
    ///
    /// Primarily internal, but part of the public surface so consumers can
    /// route their own occurrences through the same registry.
    pub fn trigger(&self, event: GestureEvent, contact: &Contact) -> Option<Outcome> {
        let context = self.context();
        let result = self
            .listeners
            .dispatch(&event, |handler| handler(context, contact));
        if let Some(trace) = &self.trace {
            trace
                .borrow_mut()
                .dispatched(event, matches!(result, Some(Outcome::Cancel)));
        }
        result
    }

    /// Processes a start signal (`touchstart` / `mousedown`).
    ///
    /// Opens a fresh gesture record and fires `start`. A vetoed `start`
    /// suppresses this gesture's move reporting (but not its release
    /// processing).
    pub fn handle_start(&mut self, platform: &mut impl Platform, signal: &RawSignal) {
        let mouse = signal.name() == MOUSE_DOWN;
        if mouse {
            self.input = InputMode::Mouse;
        }

        let prevent = !mouse && platform.user_agent().contains(ANDROID_4_UA);
        let contact = normalized(signal, prevent, false);

        self.replace_phase(Phase::Tracking(Gesture {
            origin: contact.position,
            started_at_ms: platform.now_ms(),
            motion: Motion::Still,
        }));

        if self.fire(GestureEvent::Start, &contact) {
            self.set_motion(Motion::Suppressed);
        }
    }

    /// Processes a move signal.
    ///
    /// Ignored outside a gesture and after a `start` or `moveStart` veto.
    /// The signal that first crosses the movement threshold fires
    /// `moveStart` and then `moving`; every later move signal updates the
    /// displacement and fires `moving` regardless of its own outcome.
    pub fn handle_move(&mut self, signal: &RawSignal) {
        let (origin, motion) = match &self.phase {
            Phase::Tracking(gesture) => (gesture.origin, gesture.motion),
            Phase::Idle => return,
        };

        let contact = normalized(signal, false, false);
        let delta = contact.position - origin;
        let threshold = self.config.move_threshold;

        match motion {
            Motion::Suppressed | Motion::MoveVetoed => {}
            Motion::Still => {
                if abs(delta.x) > threshold || abs(delta.y) > threshold {
                    if self.fire(GestureEvent::MoveStart, &contact) {
                        self.set_motion(Motion::MoveVetoed);
                        return;
                    }
                    self.set_motion(Motion::Moving { delta });
                    self.last_displacement = Some(delta);
                    let _ = self.trigger(GestureEvent::Moving, &contact);
                }
            }
            Motion::Moving { .. } => {
                self.set_motion(Motion::Moving { delta });
                self.last_displacement = Some(delta);
                let _ = self.trigger(GestureEvent::Moving, &contact);
            }
        }
    }

    /// Processes an end signal (`touchend` / `touchcancel` / `mouseup`).
    ///
    /// A release without a matching start is silently ignored. Moved
    /// releases classify a swipe; stationary ones become press or tap
    /// candidates (taps resolve later, in [`handle_timer`](Self::handle_timer)).
    ///
    /// Returns the outcome of the final `end` dispatch when classification
    /// reached it and handlers were registered; `None` otherwise.
    pub fn handle_end(
        &mut self,
        platform: &mut impl Platform,
        signal: &RawSignal,
    ) -> Option<Outcome> {
        let gesture = match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Tracking(gesture) => gesture,
            Phase::Idle => return None,
        };
        self.note_transition(phase_kind_of(&Phase::Tracking(gesture)), PhaseKind::Idle);

        let contact = normalized(signal, false, false);
        let moved = matches!(gesture.motion, Motion::Moving { .. } | Motion::MoveVetoed);

        if moved {
            let delta = contact.position - gesture.origin;
            self.last_displacement = Some(delta);

            if self.fire(GestureEvent::MoveEnd, &contact) {
                return None;
            }
            if let Some(swipe) = classify_swipe(&self.config, delta) {
                if self.fire(swipe, &contact) {
                    return None;
                }
            }
            return self.trigger(GestureEvent::End, &contact);
        }

        let now = platform.now_ms();
        let duration = now.saturating_sub(gesture.started_at_ms);
        let count = self.taps.as_ref().map_or(0, |window| window.count) + 1;

        if duration > self.config.press_duration_ms {
            // A press consumes the interaction; a pending tap window dies with it.
            self.taps = None;
            platform.cancel_tap_timer();
            if self.fire(GestureEvent::Press, &contact) {
                return None;
            }
            return self.trigger(GestureEvent::End, &contact);
        }

        let deadline_ms = now + self.config.tap_window_ms;
        self.taps = Some(TapWindow {
            count,
            deadline_ms,
            contact,
        });
        platform.arm_tap_timer(deadline_ms);
        None
    }

    /// Resolves a pending tap window.
    ///
    /// The host calls this when the armed timer elapses. A fire with no
    /// pending window, or one that arrives before the (possibly re-armed)
    /// deadline, is a no-op — that is how superseded timers are rejected.
    pub fn handle_timer(&mut self, emitter: &mut impl SignalEmitter, now_ms: u64) {
        let Some(window) = self.taps.take_if(|window| now_ms >= window.deadline_ms) else {
            return;
        };
        let TapWindow { count, contact, .. } = window;

        match count {
            1 => self.resolve_tap(emitter, &contact, false),
            2 => self.resolve_tap(emitter, &contact, true),
            _ => {
                self.last_tap_count = Some(count);
                if self.fire(GestureEvent::MltTap, &contact) {
                    return;
                }
                let _ = self.trigger(GestureEvent::End, &contact);
            }
        }
    }

    /// Single- and double-tap resolution: gesture event, then synthetic
    /// click (touch sessions only), then synthetic tap, then `end` — each
    /// step aborts the rest when cancelled.
    fn resolve_tap(&mut self, emitter: &mut impl SignalEmitter, contact: &Contact, double: bool) {
        let (event, click_name, tap_name) = if double {
            (GestureEvent::DblTap, SYNTHETIC_DBL_CLICK, SYNTHETIC_DBL_TAP)
        } else {
            (GestureEvent::Tap, SYNTHETIC_CLICK, SYNTHETIC_TAP)
        };

        if self.fire(event, contact) {
            return;
        }
        if self.input == InputMode::Touch
            && !emitter.emit_signal(&SyntheticSignal::bubbling(click_name, contact.position))
        {
            return;
        }
        if !emitter.emit_signal(&SyntheticSignal::bubbling(tap_name, contact.position)) {
            return;
        }
        let _ = self.trigger(GestureEvent::End, contact);
    }

    /// Dispatches and reports whether a handler cancelled.
    fn fire(&mut self, event: GestureEvent, contact: &Contact) -> bool {
        matches!(self.trigger(event, contact), Some(Outcome::Cancel))
    }

    /// Snapshot of the state handlers observe during a dispatch.
    pub fn context(&self) -> GestureContext {
        GestureContext {
            displacement: self.last_displacement,
            tap_count: self.last_tap_count,
            input: self.input,
        }
    }

    fn replace_phase(&mut self, phase: Phase) {
        let from = self.phase_kind();
        self.phase = phase;
        let to = self.phase_kind();
        self.note_transition(from, to);
    }

    fn set_motion(&mut self, motion: Motion) {
        let from = self.phase_kind();
        if let Phase::Tracking(gesture) = &mut self.phase {
            gesture.motion = motion;
        }
        let to = self.phase_kind();
        self.note_transition(from, to);
    }

    fn note_transition(&mut self, from: PhaseKind, to: PhaseKind) {
        if from == to {
            return;
        }
        if let Some(trace) = &self.trace {
            trace.borrow_mut().transition(from, to);
        }
    }
}

impl fmt::Debug for GestureEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureEngine")
            .field("config", &self.config)
            .field("input", &self.input)
            .field("phase", &self.phase)
            .field("taps", &self.taps)
            .field("last_displacement", &self.last_displacement)
            .field("last_tap_count", &self.last_tap_count)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

fn phase_kind_of(phase: &Phase) -> PhaseKind {
    match phase {
        Phase::Idle => PhaseKind::Idle,
        Phase::Tracking(gesture) => match gesture.motion {
            Motion::Moving { .. } => PhaseKind::Moving,
            _ => PhaseKind::Tracking,
        },
    }
}

/// Classifies a moved release into a directional swipe, if any.
///
/// The cross axis must stay strictly under the limit and the dominant axis
/// must strictly exceed the swipe distance. The vertical pair is checked
/// first, so a release satisfying both (impossible with the default
/// thresholds, possible with custom ones) resolves vertically.
fn classify_swipe(config: &GestureConfig, delta: Vec2) -> Option<GestureEvent> {
    if abs(delta.x) < config.swipe_cross_limit {
        if delta.y > config.swipe_distance {
            return Some(GestureEvent::SwipeDown);
        }
        if delta.y < -config.swipe_distance {
            return Some(GestureEvent::SwipeUp);
        }
    } else if abs(delta.y) < config.swipe_cross_limit {
        if delta.x > config.swipe_distance {
            return Some(GestureEvent::SwipeRight);
        }
        if delta.x < -config.swipe_distance {
            return Some(GestureEvent::SwipeLeft);
        }
    }
    None
}

// Plain sign flip; `f64::abs` needs either `std` or `libm`.
fn abs(value: f64) -> f64 {
    if value < 0.0 { -value } else { value }
}
