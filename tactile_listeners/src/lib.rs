// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tactile_listeners --heading-base-level=0

//! Tactile Listeners: an ordered, cancellable listener registry.
//!
//! [`Listeners`] maps an event key to an ordered list of handlers and walks
//! that list on dispatch, honoring a cancellation sentinel: the first handler
//! that returns [`Outcome::Cancel`] short-circuits the remaining handlers for
//! that one dispatch (other event keys are unaffected).
//!
//! The registry is deliberately signature-agnostic. Handlers are stored as
//! `Rc<T>` for any (usually unsized) handler type `T`, and the caller
//! supplies the invocation at dispatch time. This keeps the registry free of
//! assumptions about handler arguments while still giving it what it needs:
//! insertion order, identity-based dedup, and first-match removal.
//!
//! ## Semantics
//!
//! - Registration order is dispatch order.
//! - Registering the same handler (same `Rc` identity) twice for one event
//!   is ignored.
//! - [`Listeners::off`] clears every handler for an event;
//!   [`Listeners::off_handler`] removes only the first matching reference.
//! - Dispatch for an event with no handlers is a no-op and reports `None`.
//!
//! ## Minimal example
//!
//! ```
//! use std::rc::Rc;
//! use tactile_listeners::{Listeners, Outcome};
//!
//! type Handler = dyn Fn(&str) -> Outcome;
//!
//! let mut listeners: Listeners<&'static str, Handler> = Listeners::new();
//! listeners.on("greet", Rc::new(|name: &str| {
//!     assert_eq!(name, "world");
//!     Outcome::Continue
//! }) as Rc<Handler>);
//!
//! let result = listeners.dispatch(&"greet", |handler| handler("world"));
//! assert_eq!(result, Some(Outcome::Continue));
//!
//! // No handlers registered for this key: a silent no-op.
//! assert_eq!(listeners.dispatch(&"other", |handler| handler("world")), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Flow-control sentinel returned by handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep walking the remaining handlers.
    Continue,
    /// Stop this dispatch immediately; remaining handlers do not run.
    Cancel,
}

impl Outcome {
    /// Whether this outcome cancels the dispatch.
    pub fn is_cancel(self) -> bool {
        matches!(self, Self::Cancel)
    }
}

/// A per-event, ordered collection of shared handlers.
///
/// `E` is the event key; `T` is the handler type, stored as `Rc<T>` so that
/// clones of one registration share identity (which dedup and removal use).
pub struct Listeners<E, T: ?Sized> {
    map: HashMap<E, SmallVec<[Rc<T>; 2]>>,
}

impl<E, T: ?Sized> Default for Listeners<E, T>
where
    E: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, T: ?Sized> Listeners<E, T>
where
    E: Eq + Hash,
{
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Appends a handler for `event`, preserving registration order.
    ///
    /// A handler already registered for the same event (same `Rc`
    /// identity) is ignored.
    pub fn on(&mut self, event: E, handler: Rc<T>) {
        let handlers = self.map.entry(event).or_default();
        if handlers.iter().any(|existing| Rc::ptr_eq(existing, &handler)) {
            return;
        }
        handlers.push(handler);
    }

    /// Batch registration: every `(event, handler)` entry in order.
    ///
    /// An ordered sequence of handlers for one event is expressed as
    /// repeated entries with the same key.
    pub fn on_each(&mut self, entries: impl IntoIterator<Item = (E, Rc<T>)>) {
        for (event, handler) in entries {
            self.on(event, handler);
        }
    }

    /// Clears every handler registered for `event`.
    pub fn off(&mut self, event: &E) {
        self.map.remove(event);
    }

    /// Removes the first handler registered for `event` that matches
    /// `handler` by identity.
    pub fn off_handler(&mut self, event: &E, handler: &Rc<T>) {
        if let Some(handlers) = self.map.get_mut(event) {
            if let Some(index) = handlers.iter().position(|h| Rc::ptr_eq(h, handler)) {
                handlers.remove(index);
            }
        }
    }

    /// Invokes `invoke` for each handler of `event` in registration order.
    ///
    /// Stops at the first [`Outcome::Cancel`] and reports it. Returns
    /// `Some(Outcome::Continue)` when every handler ran, and `None` when no
    /// handler is registered for `event` (the no-op case).
    pub fn dispatch(&self, event: &E, mut invoke: impl FnMut(&T) -> Outcome) -> Option<Outcome> {
        let handlers = self.map.get(event)?;
        if handlers.is_empty() {
            return None;
        }
        for handler in handlers {
            if invoke(handler.as_ref()).is_cancel() {
                return Some(Outcome::Cancel);
            }
        }
        Some(Outcome::Continue)
    }

    /// Number of handlers registered for `event`.
    pub fn count(&self, event: &E) -> usize {
        self.map.get(event).map_or(0, |handlers| handlers.len())
    }

    /// Whether any handler is registered for `event`.
    pub fn is_registered(&self, event: &E) -> bool {
        self.count(event) > 0
    }
}

impl<E, T: ?Sized> fmt::Debug for Listeners<E, T>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (event, handlers) in &self.map {
            map.entry(event, &handlers.len());
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    type Handler = dyn Fn(&RefCell<Vec<u32>>) -> Outcome;

    fn push(value: u32) -> Rc<Handler> {
        Rc::new(move |log: &RefCell<Vec<u32>>| {
            log.borrow_mut().push(value);
            Outcome::Continue
        })
    }

    fn push_and_cancel(value: u32) -> Rc<Handler> {
        Rc::new(move |log: &RefCell<Vec<u32>>| {
            log.borrow_mut().push(value);
            Outcome::Cancel
        })
    }

    #[test]
    fn dispatch_runs_in_registration_order() {
        let mut listeners: Listeners<&str, Handler> = Listeners::new();
        listeners.on("e", push(1));
        listeners.on("e", push(2));
        listeners.on("e", push(3));

        let log = RefCell::new(Vec::new());
        let result = listeners.dispatch(&"e", |h| h(&log));

        assert_eq!(result, Some(Outcome::Continue));
        assert_eq!(*log.borrow(), [1, 2, 3]);
    }

    #[test]
    fn cancel_short_circuits_later_handlers() {
        let mut listeners: Listeners<&str, Handler> = Listeners::new();
        listeners.on("e", push(1));
        listeners.on("e", push_and_cancel(2));
        listeners.on("e", push(3));

        let log = RefCell::new(Vec::new());
        let result = listeners.dispatch(&"e", |h| h(&log));

        assert_eq!(result, Some(Outcome::Cancel));
        assert_eq!(*log.borrow(), [1, 2]);
    }

    #[test]
    fn dispatch_without_handlers_reports_none() {
        let listeners: Listeners<&str, Handler> = Listeners::new();
        let log = RefCell::new(Vec::new());
        assert_eq!(listeners.dispatch(&"missing", |h| h(&log)), None);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let mut listeners: Listeners<&str, Handler> = Listeners::new();
        let handler = push(7);
        listeners.on("e", Rc::clone(&handler));
        listeners.on("e", Rc::clone(&handler));

        assert_eq!(listeners.count(&"e"), 1);

        // The same callback under a distinct Rc is a distinct registration.
        listeners.on("e", push(7));
        assert_eq!(listeners.count(&"e"), 2);
    }

    #[test]
    fn off_clears_all_handlers_for_the_event() {
        let mut listeners: Listeners<&str, Handler> = Listeners::new();
        listeners.on("e", push(1));
        listeners.on("e", push(2));
        listeners.on("other", push(3));

        listeners.off(&"e");

        assert!(!listeners.is_registered(&"e"));
        assert!(listeners.is_registered(&"other"));

        let log = RefCell::new(Vec::new());
        assert_eq!(listeners.dispatch(&"e", |h| h(&log)), None);
    }

    #[test]
    fn off_handler_removes_first_match_only() {
        let mut listeners: Listeners<&str, Handler> = Listeners::new();
        let target = push(2);
        listeners.on("e", push(1));
        listeners.on("e", Rc::clone(&target));
        listeners.on("e", push(3));

        listeners.off_handler(&"e", &target);

        let log = RefCell::new(Vec::new());
        let _ = listeners.dispatch(&"e", |h| h(&log));
        assert_eq!(*log.borrow(), [1, 3]);
    }

    #[test]
    fn off_handler_with_unknown_reference_is_a_noop() {
        let mut listeners: Listeners<&str, Handler> = Listeners::new();
        listeners.on("e", push(1));

        listeners.off_handler(&"e", &push(9));
        listeners.off_handler(&"missing", &push(9));

        assert_eq!(listeners.count(&"e"), 1);
    }

    #[test]
    fn on_each_registers_in_iteration_order() {
        let mut listeners: Listeners<&str, Handler> = Listeners::new();
        listeners.on_each([("e", push(1)), ("e", push(2)), ("f", push(10))]);

        let log = RefCell::new(Vec::new());
        let _ = listeners.dispatch(&"e", |h| h(&log));
        let _ = listeners.dispatch(&"f", |h| h(&log));
        assert_eq!(*log.borrow(), [1, 2, 10]);
    }

    #[test]
    fn cancellation_in_one_event_does_not_affect_another() {
        let mut listeners: Listeners<&str, Handler> = Listeners::new();
        listeners.on("a", push_and_cancel(1));
        listeners.on("b", push(2));

        let log = RefCell::new(Vec::new());
        assert_eq!(listeners.dispatch(&"a", |h| h(&log)), Some(Outcome::Cancel));
        assert_eq!(listeners.dispatch(&"b", |h| h(&log)), Some(Outcome::Continue));
        assert_eq!(*log.borrow(), [1, 2]);
    }
}
