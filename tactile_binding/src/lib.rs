// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_binding --heading-base-level=0

//! Tactile Binding: cross-environment signal binding for display surfaces.
//!
//! This crate is the leaf layer of Tactile. It carries no state of its own:
//! it defines the shape of raw low-level signals, the [`Surface`] trait that
//! hides environment-specific listener attachment behind one seam, and the
//! [`bind`]/[`unbind`] utilities that expand space-separated signal-name
//! lists and batch maps into minimal per-name attach/detach calls.
//!
//! ## Signals
//!
//! A [`RawSignal`] is one raw pointer/touch signal as delivered by the host:
//! a native name (`"touchstart"`, `"mousedown"`, …), a position, an optional
//! list of changed contact points for touch-shaped signals, and consumption
//! flags (`prevent_default` / `stop_propagation`) that higher layers may set
//! when the signal's [`SignalOptions`] permit it.
//!
//! A [`SyntheticSignal`] travels the other way: produced by a gesture engine
//! and handed back to the surface through [`Surface::dispatch`], so consumers
//! that never registered with the engine can still observe taps and clicks.
//!
//! ## Attachment mechanisms
//!
//! [`Surface`] exposes a primary listener mechanism plus a single-slot
//! fallback (the `on<name>` property analogue of older hosts). [`bind`]
//! prefers the primary mechanism and silently falls back when the surface
//! does not support it; this is the only place those differences live.
//!
//! ## Minimal example
//!
//! ```
//! use tactile_binding::{Listener, RawSignal, Surface, SyntheticSignal, bind, unbind};
//! use core::cell::RefCell;
//! use std::collections::HashMap;
//! use std::rc::Rc;
//!
//! // A toy surface storing listeners per signal name.
//! #[derive(Clone, Default)]
//! struct Toy(Rc<RefCell<HashMap<String, Vec<Listener>>>>);
//!
//! impl Surface for Toy {
//!     fn add_listener(&self, name: &str, listener: &Listener) -> bool {
//!         self.0.borrow_mut().entry(name.into()).or_default().push(listener.clone());
//!         true
//!     }
//!     fn remove_listener(&self, name: &str, listener: &Listener) -> bool {
//!         if let Some(list) = self.0.borrow_mut().get_mut(name) {
//!             list.retain(|l| !l.ptr_eq(listener));
//!         }
//!         true
//!     }
//!     fn set_fallback_listener(&self, _name: &str, _listener: Option<Listener>) {}
//!     fn clear_listeners(&self, name: &str) {
//!         self.0.borrow_mut().remove(name);
//!     }
//!     fn dispatch(&self, _signal: &SyntheticSignal) -> bool {
//!         true
//!     }
//!     fn document(&self) -> Self {
//!         self.clone()
//!     }
//! }
//!
//! let surface = Toy::default();
//! let listener = Listener::new(|_signal: &RawSignal| {});
//!
//! // One call binds the listener once per space-separated name.
//! bind(&surface, "touchstart mousedown", &listener);
//! assert_eq!(surface.0.borrow()["touchstart"].len(), 1);
//! assert_eq!(surface.0.borrow()["mousedown"].len(), 1);
//!
//! // A blank name list is a silent no-op.
//! bind(&surface, "   ", &listener);
//! assert_eq!(surface.0.borrow().len(), 2);
//!
//! unbind(&surface, "touchstart mousedown", Some(&listener));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bind;
mod signal;
mod surface;

pub use bind::{bind, bind_map, unbind, unbind_map};
pub use signal::{Listener, RawSignal, SignalOptions, SyntheticSignal};
pub use surface::Surface;
