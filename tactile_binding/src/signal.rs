// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw and synthetic signal types plus the listener handle.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::Cell;
use core::fmt;

use kurbo::Point;
use smallvec::SmallVec;

bitflags::bitflags! {
    /// Delivery traits of a signal.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SignalOptions: u8 {
        /// The signal propagates upward through enclosing targets.
        const BUBBLES = 0b0000_0001;
        /// Consumers may cancel the signal's default action.
        const CANCELABLE = 0b0000_0010;
    }
}

impl Default for SignalOptions {
    fn default() -> Self {
        Self::BUBBLES | Self::CANCELABLE
    }
}

/// A raw low-level signal delivered by the host environment.
///
/// Touch-shaped signals carry their changed contact points in
/// [`changed_points`](Self::changed_points); mouse-shaped signals carry a
/// single [`position`](Self::position) and an empty point list. Consumption
/// flags use interior mutability so that a processing layer can mark the
/// signal without owning it, mirroring how host event objects behave.
#[derive(Clone, Debug)]
pub struct RawSignal {
    name: String,
    position: Point,
    changed_points: SmallVec<[Point; 1]>,
    options: SignalOptions,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl RawSignal {
    /// Creates a signal with default options (`BUBBLES | CANCELABLE`).
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            name: name.into(),
            position,
            changed_points: SmallVec::new(),
            options: SignalOptions::default(),
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
        }
    }

    /// Replaces the signal's delivery options.
    #[must_use]
    pub fn with_options(mut self, options: SignalOptions) -> Self {
        self.options = options;
        self
    }

    /// Attaches a changed contact-point list, making this a touch-shaped signal.
    #[must_use]
    pub fn with_changed_points(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.changed_points = points.into_iter().collect();
        self
    }

    /// Native name of the signal, e.g. `"touchstart"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pointer position carried directly on the signal.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Contact points that changed in this signal; empty for mouse-shaped signals.
    pub fn changed_points(&self) -> &[Point] {
        &self.changed_points
    }

    /// The signal's delivery options.
    pub fn options(&self) -> SignalOptions {
        self.options
    }

    /// Marks the signal's default action as cancelled.
    ///
    /// No-op when the signal is not [`SignalOptions::CANCELABLE`]; the
    /// capability check stands in for hosts whose signals lack the hook.
    pub fn prevent_default(&self) {
        if self.options.contains(SignalOptions::CANCELABLE) {
            self.default_prevented.set(true);
        }
    }

    /// Whether [`prevent_default`](Self::prevent_default) has taken effect.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Stops the signal from propagating to enclosing targets.
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    /// Whether [`stop_propagation`](Self::stop_propagation) was called.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

/// A higher-level signal dispatched back onto a surface.
///
/// Produced by a gesture engine when a tap resolves, so code that listens on
/// the surface directly (rather than on the engine) can observe the gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticSignal {
    /// Signal name, e.g. `"click"` or `"tap"`.
    pub name: &'static str,
    /// Position the originating contact ended at.
    pub position: Point,
    /// Delivery options.
    pub options: SignalOptions,
}

impl SyntheticSignal {
    /// Creates a bubbling, cancelable synthetic signal.
    pub fn bubbling(name: &'static str, position: Point) -> Self {
        Self {
            name,
            position,
            options: SignalOptions::BUBBLES | SignalOptions::CANCELABLE,
        }
    }
}

/// A cloneable handle to a raw-signal callback.
///
/// Clones share identity: [`ptr_eq`](Self::ptr_eq) compares the underlying
/// callback, which is what dedup and removal key on.
#[derive(Clone)]
pub struct Listener(Rc<dyn Fn(&RawSignal)>);

impl Listener {
    /// Wraps a callback in a listener handle.
    pub fn new(callback: impl Fn(&RawSignal) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Invokes the callback.
    pub fn call(&self, signal: &RawSignal) {
        (self.0)(signal);
    }

    /// Whether two handles refer to the same callback.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn prevent_default_requires_cancelable() {
        let cancelable = RawSignal::new("touchstart", Point::ZERO);
        cancelable.prevent_default();
        assert!(cancelable.default_prevented());

        let inert =
            RawSignal::new("touchstart", Point::ZERO).with_options(SignalOptions::BUBBLES);
        inert.prevent_default();
        assert!(!inert.default_prevented());
    }

    #[test]
    fn stop_propagation_is_unconditional() {
        let signal = RawSignal::new("touchmove", Point::ZERO).with_options(SignalOptions::empty());
        signal.stop_propagation();
        assert!(signal.propagation_stopped());
    }

    #[test]
    fn changed_points_default_empty() {
        let mouse = RawSignal::new("mousedown", Point::new(3.0, 4.0));
        assert!(mouse.changed_points().is_empty());
        assert_eq!(mouse.position(), Point::new(3.0, 4.0));

        let touch = RawSignal::new("touchstart", Point::ZERO)
            .with_changed_points([Point::new(1.0, 2.0), Point::new(9.0, 9.0)]);
        assert_eq!(touch.changed_points().len(), 2);
    }

    #[test]
    fn listener_clones_share_identity() {
        let hits = Rc::new(Cell::new(0_u32));
        let hits2 = Rc::clone(&hits);
        let listener = Listener::new(move |_signal| hits2.set(hits2.get() + 1));
        let clone = listener.clone();

        assert!(listener.ptr_eq(&clone));
        clone.call(&RawSignal::new("mouseup", Point::ZERO));
        assert_eq!(hits.get(), 1);

        let other = Listener::new(|_signal| {});
        assert!(!listener.ptr_eq(&other));
    }

    #[test]
    fn synthetic_bubbling_sets_both_options() {
        let signal = SyntheticSignal::bubbling("click", Point::new(10.0, 20.0));
        assert!(signal.options.contains(SignalOptions::BUBBLES));
        assert!(signal.options.contains(SignalOptions::CANCELABLE));
    }
}
