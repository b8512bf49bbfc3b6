// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface wiring for the gesture engine.
//!
//! [`GestureTracker`] binds the three native signal groups to one surface,
//! routes delivered signals into a [`GestureEngine`], and manages the
//! mouse-session document capture: once a `mousedown` arrives, move/up
//! listeners are additionally bound at the document level so a drag keeps
//! reporting after the pointer leaves the surface. Touch sessions never need
//! this, because touch signals keep targeting the surface the contact
//! started on.
//!
//! The tracker is the only piece of this crate that holds shared mutable
//! state (`Rc<RefCell<…>>`): the bound listeners are closures that re-enter
//! the engine when the host delivers a signal. Hosts must not call back into
//! the tracker from inside [`Surface::add_listener`] or
//! [`Surface::dispatch`]; processing is single-threaded and synchronous.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use tactile_binding::{Listener, RawSignal, Surface, SyntheticSignal, bind, unbind};
use tactile_listeners::Outcome;

use crate::engine::{Contact, GestureContext, GestureEngine, GestureHandler, InputMode};
use crate::events::GestureEvent;
use crate::platform::{Platform, SignalEmitter};
use crate::trace::GestureTrace;
use crate::{END_SIGNALS, MOUSE_DOWN, MOUSE_MOVE, MOUSE_UP, MOVE_SIGNALS, START_SIGNALS};

/// Adapter that points the engine's synthetic output at a surface.
struct SurfaceEmitter<'a, S: Surface>(&'a S);

impl<S: Surface> SignalEmitter for SurfaceEmitter<'_, S> {
    fn emit_signal(&mut self, signal: &SyntheticSignal) -> bool {
        self.0.dispatch(signal)
    }
}

struct Shared<S: Surface, P: Platform> {
    engine: GestureEngine,
    platform: P,
    surface: S,
    document_capture: bool,
    move_listener: Option<Listener>,
    end_listener: Option<Listener>,
}

impl<S: Surface, P: Platform> Shared<S, P> {
    fn on_start(&mut self, signal: &RawSignal) {
        if signal.name() == MOUSE_DOWN {
            self.capture_document();
        }
        let Self {
            engine, platform, ..
        } = self;
        engine.handle_start(platform, signal);
    }

    fn on_move(&mut self, signal: &RawSignal) {
        self.engine.handle_move(signal);
    }

    fn on_end(&mut self, signal: &RawSignal) {
        if signal.name() == MOUSE_UP {
            self.release_document();
        }
        let Self {
            engine, platform, ..
        } = self;
        let _ = engine.handle_end(platform, signal);
    }

    fn capture_document(&mut self) {
        if self.document_capture {
            return;
        }
        let document = self.surface.document();
        if let (Some(move_listener), Some(end_listener)) =
            (&self.move_listener, &self.end_listener)
        {
            bind(&document, MOUSE_MOVE, move_listener);
            bind(&document, MOUSE_UP, end_listener);
            self.document_capture = true;
        }
    }

    fn release_document(&mut self) {
        if !self.document_capture {
            return;
        }
        let document = self.surface.document();
        if let Some(move_listener) = &self.move_listener {
            unbind(&document, MOUSE_MOVE, Some(move_listener));
        }
        if let Some(end_listener) = &self.end_listener {
            unbind(&document, MOUSE_UP, Some(end_listener));
        }
        self.document_capture = false;
    }
}

/// A gesture engine bound to one display surface.
///
/// Created with a surface handle and a [`Platform`]; tears its native
/// bindings down with [`destroy`](Self::destroy). Registration methods
/// return `&Self` so calls chain.
///
/// ## Minimal example
///
/// See the crate docs; the registry surface mirrors
/// [`GestureEngine`]'s `on`/`off`/`trigger`.
pub struct GestureTracker<S: Surface + 'static, P: Platform + 'static> {
    shared: Rc<RefCell<Shared<S, P>>>,
    start_listener: Listener,
    move_listener: Listener,
    end_listener: Listener,
}

impl<S: Surface + 'static, P: Platform + 'static> GestureTracker<S, P> {
    /// Binds a new tracker to `surface`.
    pub fn new(surface: S, platform: P) -> Self {
        Self::with_engine(surface, platform, GestureEngine::new())
    }

    /// Binds a new tracker and registers an initial set of handlers, as if
    /// [`on_each`](Self::on_each) had been called right after construction.
    pub fn with_handlers(
        surface: S,
        platform: P,
        entries: impl IntoIterator<Item = (GestureEvent, Rc<GestureHandler>)>,
    ) -> Self {
        let tracker = Self::new(surface, platform);
        tracker.on_each(entries);
        tracker
    }

    /// Binds a new tracker around a pre-configured engine.
    pub fn with_engine(surface: S, platform: P, engine: GestureEngine) -> Self {
        let shared = Rc::new(RefCell::new(Shared {
            engine,
            platform,
            surface,
            document_capture: false,
            move_listener: None,
            end_listener: None,
        }));

        let start_listener = {
            let shared = Rc::clone(&shared);
            Listener::new(move |signal| shared.borrow_mut().on_start(signal))
        };
        let move_listener = {
            let shared = Rc::clone(&shared);
            Listener::new(move |signal| shared.borrow_mut().on_move(signal))
        };
        let end_listener = {
            let shared = Rc::clone(&shared);
            Listener::new(move |signal| shared.borrow_mut().on_end(signal))
        };

        let surface = {
            let mut inner = shared.borrow_mut();
            inner.move_listener = Some(move_listener.clone());
            inner.end_listener = Some(end_listener.clone());
            inner.surface.clone()
        };

        bind(&surface, START_SIGNALS, &start_listener);
        bind(&surface, MOVE_SIGNALS, &move_listener);
        bind(&surface, END_SIGNALS, &end_listener);

        Self {
            shared,
            start_listener,
            move_listener,
            end_listener,
        }
    }

    /// Registers a handler for `event`.
    pub fn on(&self, event: GestureEvent, handler: Rc<GestureHandler>) -> &Self {
        self.shared.borrow_mut().engine.on(event, handler);
        self
    }

    /// Batch registration of `(event, handler)` entries in order.
    pub fn on_each(
        &self,
        entries: impl IntoIterator<Item = (GestureEvent, Rc<GestureHandler>)>,
    ) -> &Self {
        self.shared.borrow_mut().engine.on_each(entries);
        self
    }

    /// Clears every handler for `event`.
    pub fn off(&self, event: GestureEvent) -> &Self {
        self.shared.borrow_mut().engine.off(event);
        self
    }

    /// Removes the first handler for `event` matching `handler` by identity.
    pub fn off_handler(&self, event: GestureEvent, handler: &Rc<GestureHandler>) -> &Self {
        self.shared.borrow_mut().engine.off_handler(event, handler);
        self
    }

    /// Dispatches `event` through the registry. See [`GestureEngine::trigger`].
    pub fn trigger(&self, event: GestureEvent, contact: &Contact) -> Option<Outcome> {
        self.shared.borrow().engine.trigger(event, contact)
    }

    /// Timer entry point: the host calls this when the tap timer it armed
    /// through [`Platform::arm_tap_timer`] elapses.
    pub fn handle_timer(&self, now_ms: u64) {
        let mut shared = self.shared.borrow_mut();
        let Shared {
            engine, surface, ..
        } = &mut *shared;
        engine.handle_timer(&mut SurfaceEmitter(surface), now_ms);
    }

    /// The input mode the engine has settled on.
    pub fn input(&self) -> InputMode {
        self.shared.borrow().engine.input()
    }

    /// Snapshot of the state handlers would currently observe.
    pub fn context(&self) -> GestureContext {
        self.shared.borrow().engine.context()
    }

    /// Replaces the engine's thresholds.
    pub fn set_config(&self, config: crate::GestureConfig) {
        self.shared.borrow_mut().engine.set_config(config);
    }

    /// Installs a trace sink on the engine.
    pub fn set_trace(&self, trace: Rc<RefCell<dyn GestureTrace>>) {
        self.shared.borrow_mut().engine.set_trace(trace);
    }

    /// Unbinds all native signal groups (and any document capture).
    ///
    /// The listener registry survives, but no signal can reach the engine
    /// afterwards. A pending tap window is left to resolve: a timer the host
    /// already armed may still fire and classify. Idempotent.
    pub fn destroy(&self) {
        let mut shared = self.shared.borrow_mut();
        shared.release_document();
        let surface = shared.surface.clone();
        drop(shared);

        unbind(&surface, START_SIGNALS, Some(&self.start_listener));
        unbind(&surface, MOVE_SIGNALS, Some(&self.move_listener));
        unbind(&surface, END_SIGNALS, Some(&self.end_listener));
    }
}

impl<S: Surface + 'static, P: Platform + 'static> fmt::Debug for GestureTracker<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureTracker")
            .field("engine", &self.shared.borrow().engine)
            .finish_non_exhaustive()
    }
}
