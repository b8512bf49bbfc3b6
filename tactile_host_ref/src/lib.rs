// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_host_ref --heading-base-level=0

//! Tactile Host Ref: an in-memory reference host for Tactile.
//!
//! Real hosts attach Tactile to an actual display environment. This crate
//! provides the same seams without one, for tests, demos, and debugging:
//!
//! - [`MemorySurface`]: a [`Surface`](tactile_binding::Surface) that stores
//!   listeners per signal name, lets a driver [`deliver`](MemorySurface::deliver)
//!   raw signals to them, records every synthetic signal dispatched at it,
//!   and can be linked to a document-level surface for mouse capture.
//! - [`ManualPlatform`]: a [`Platform`](tactile_gestures::Platform) with a
//!   manual millisecond clock, a configurable user-agent string, and a
//!   single recorded tap-timer slot with replace semantics.
//!
//! Both are cheap-to-clone handles sharing their state, so a test can keep a
//! handle to the same surface/platform it handed to a tracker.
//!
//! ## Minimal example
//!
//! ```
//! use tactile_gestures::{GestureEvent, GestureTracker, Outcome, handler};
//! use tactile_host_ref::{ManualPlatform, MemorySurface, run_pending_timer, signals};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let surface = MemorySurface::new();
//! let platform = ManualPlatform::new();
//! let tracker = GestureTracker::new(surface.clone(), platform.clone());
//!
//! let taps = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&taps);
//! tracker.on(
//!     GestureEvent::Tap,
//!     handler(move |_context, _contact| {
//!         seen.set(seen.get() + 1);
//!         Outcome::Continue
//!     }),
//! );
//!
//! surface.deliver(&signals::touch_start(50.0, 50.0));
//! platform.advance(60);
//! surface.deliver(&signals::touch_end(50.0, 50.0));
//!
//! // Let the classification window elapse and run the armed timer.
//! platform.advance(250);
//! assert!(run_pending_timer(&platform, &tracker));
//! assert_eq!(taps.get(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod platform;
pub mod signals;
mod surface;

pub use platform::{ManualPlatform, run_pending_timer};
pub use surface::MemorySurface;
