// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The in-memory display surface.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use hashbrown::HashMap;
use tactile_binding::{Listener, RawSignal, Surface, SyntheticSignal};

type SyntheticConsumer = Box<dyn Fn(&SyntheticSignal) -> bool>;

struct SurfaceInner {
    label: &'static str,
    primary_supported: bool,
    listeners: RefCell<HashMap<String, Vec<Listener>>>,
    fallback: RefCell<HashMap<String, Listener>>,
    synthetics: RefCell<Vec<SyntheticSignal>>,
    consumers: RefCell<Vec<SyntheticConsumer>>,
    document: RefCell<Option<MemorySurface>>,
}

/// An in-memory [`Surface`] whose signals are delivered by the test driver.
///
/// Clones are handles to the same surface. Listener storage mimics the
/// behavior Tactile's binding layer expects from real hosts: the primary
/// mechanism keeps an ordered, identity-deduped list per signal name, and
/// the fallback mechanism is one slot per name.
#[derive(Clone)]
pub struct MemorySurface {
    inner: Rc<SurfaceInner>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// Creates a surface supporting the primary listener mechanism.
    #[must_use]
    pub fn new() -> Self {
        Self::with_label("surface")
    }

    /// Creates a labeled surface (labels only show up in `Debug` output).
    #[must_use]
    pub fn with_label(label: &'static str) -> Self {
        Self::build(label, true)
    }

    /// Creates a surface without the primary mechanism, so attachment goes
    /// through the single-slot fallback — the legacy-host case.
    #[must_use]
    pub fn legacy(label: &'static str) -> Self {
        Self::build(label, false)
    }

    fn build(label: &'static str, primary_supported: bool) -> Self {
        Self {
            inner: Rc::new(SurfaceInner {
                label,
                primary_supported,
                listeners: RefCell::new(HashMap::new()),
                fallback: RefCell::new(HashMap::new()),
                synthetics: RefCell::new(Vec::new()),
                consumers: RefCell::new(Vec::new()),
                document: RefCell::new(None),
            }),
        }
    }

    /// Links an enclosing document-level surface; [`Surface::document`]
    /// returns it from now on.
    pub fn set_document(&self, document: &Self) {
        *self.inner.document.borrow_mut() = Some(document.clone());
    }

    /// Delivers a raw signal to every listener registered for its name,
    /// primary registrations first (in order), then the fallback slot.
    pub fn deliver(&self, signal: &RawSignal) {
        let registered: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .get(signal.name())
            .cloned()
            .unwrap_or_default();
        for listener in &registered {
            listener.call(signal);
        }
        let fallback = self.inner.fallback.borrow().get(signal.name()).cloned();
        if let Some(listener) = fallback {
            listener.call(signal);
        }
    }

    /// Number of registrations for `name`, across both mechanisms.
    pub fn listener_count(&self, name: &str) -> usize {
        let primary = self
            .inner
            .listeners
            .borrow()
            .get(name)
            .map_or(0, Vec::len);
        let fallback = usize::from(self.inner.fallback.borrow().contains_key(name));
        primary + fallback
    }

    /// Every synthetic signal dispatched at this surface, oldest first.
    pub fn synthetics(&self) -> Vec<SyntheticSignal> {
        self.inner.synthetics.borrow().clone()
    }

    /// Registers a surface-level consumer for synthetic signals. Returning
    /// `false` cancels the signal's default action (all consumers still run).
    pub fn on_synthetic(&self, consumer: impl Fn(&SyntheticSignal) -> bool + 'static) {
        self.inner.consumers.borrow_mut().push(Box::new(consumer));
    }
}

impl Surface for MemorySurface {
    fn add_listener(&self, name: &str, listener: &Listener) -> bool {
        if !self.inner.primary_supported {
            return false;
        }
        let mut listeners = self.inner.listeners.borrow_mut();
        let registered = listeners.entry(String::from(name)).or_default();
        if !registered.iter().any(|l| l.ptr_eq(listener)) {
            registered.push(listener.clone());
        }
        true
    }

    fn remove_listener(&self, name: &str, listener: &Listener) -> bool {
        if !self.inner.primary_supported {
            return false;
        }
        if let Some(registered) = self.inner.listeners.borrow_mut().get_mut(name) {
            if let Some(index) = registered.iter().position(|l| l.ptr_eq(listener)) {
                registered.remove(index);
            }
        }
        true
    }

    fn set_fallback_listener(&self, name: &str, listener: Option<Listener>) {
        match listener {
            Some(listener) => {
                self.inner
                    .fallback
                    .borrow_mut()
                    .insert(String::from(name), listener);
            }
            None => {
                self.inner.fallback.borrow_mut().remove(name);
            }
        }
    }

    fn clear_listeners(&self, name: &str) {
        self.inner.listeners.borrow_mut().remove(name);
        self.inner.fallback.borrow_mut().remove(name);
    }

    fn dispatch(&self, signal: &SyntheticSignal) -> bool {
        self.inner.synthetics.borrow_mut().push(signal.clone());
        let consumers = self.inner.consumers.borrow();
        let mut ok = true;
        for consumer in consumers.iter() {
            if !consumer(signal) {
                ok = false;
            }
        }
        ok
    }

    fn document(&self) -> Self {
        self.inner
            .document
            .borrow()
            .clone()
            .unwrap_or_else(|| self.clone())
    }
}

impl fmt::Debug for MemorySurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySurface")
            .field("label", &self.inner.label)
            .field("synthetics", &self.inner.synthetics.borrow().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use kurbo::Point;
    use tactile_binding::SignalOptions;

    fn counter() -> (Listener, Rc<Cell<u32>>) {
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let listener = Listener::new(move |_signal| seen.set(seen.get() + 1));
        (listener, hits)
    }

    #[test]
    fn deliver_reaches_primary_then_fallback() {
        let surface = MemorySurface::new();
        let (primary, primary_hits) = counter();
        let (fallback, fallback_hits) = counter();
        assert!(surface.add_listener("touchstart", &primary));
        surface.set_fallback_listener("touchstart", Some(fallback));

        surface.deliver(&RawSignal::new("touchstart", Point::ZERO));

        assert_eq!(primary_hits.get(), 1);
        assert_eq!(fallback_hits.get(), 1);
        assert_eq!(surface.listener_count("touchstart"), 2);
    }

    #[test]
    fn deliver_ignores_other_names() {
        let surface = MemorySurface::new();
        let (listener, hits) = counter();
        assert!(surface.add_listener("touchend", &listener));

        surface.deliver(&RawSignal::new("touchstart", Point::ZERO));

        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn add_listener_dedups_by_identity() {
        let surface = MemorySurface::new();
        let (listener, _hits) = counter();
        assert!(surface.add_listener("mousemove", &listener));
        assert!(surface.add_listener("mousemove", &listener));
        assert_eq!(surface.listener_count("mousemove"), 1);
    }

    #[test]
    fn legacy_surface_rejects_primary_mechanism() {
        let surface = MemorySurface::legacy("old");
        let (listener, hits) = counter();
        assert!(!surface.add_listener("touchstart", &listener));

        surface.set_fallback_listener("touchstart", Some(listener));
        surface.deliver(&RawSignal::new("touchstart", Point::ZERO));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dispatch_records_and_reports_cancellation() {
        let surface = MemorySurface::new();
        surface.on_synthetic(|signal| signal.name != "click");

        let click = SyntheticSignal::bubbling("click", Point::ZERO);
        let tap = SyntheticSignal::bubbling("tap", Point::ZERO);
        assert!(!surface.dispatch(&click));
        assert!(surface.dispatch(&tap));

        let recorded = surface.synthetics();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].name, "click");
        assert!(recorded[0].options.contains(SignalOptions::CANCELABLE));
    }

    #[test]
    fn document_defaults_to_self() {
        let surface = MemorySurface::new();
        let (listener, hits) = counter();
        assert!(surface.document().add_listener("mouseup", &listener));
        surface.deliver(&RawSignal::new("mouseup", Point::ZERO));
        assert_eq!(hits.get(), 1);

        let document = MemorySurface::with_label("document");
        surface.set_document(&document);
        assert_eq!(surface.document().listener_count("mouseup"), 0);
    }
}
