// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The display-surface target abstraction.

use crate::signal::{Listener, SyntheticSignal};

/// A handle to one display-surface target that signals can be attached to.
///
/// Implementations are cheap-to-clone handles (the trait is modeled on host
/// element references, not owned widgets). All methods take `&self`;
/// implementations use interior mutability.
///
/// Two attachment mechanisms are exposed. The primary one
/// ([`add_listener`](Self::add_listener)) supports any number of listeners
/// per name; hosts that lack it report `false` and callers fall back to the
/// single-slot mechanism ([`set_fallback_listener`](Self::set_fallback_listener)).
/// [`crate::bind`] and [`crate::unbind`] encapsulate that choice; code above
/// this crate never picks a mechanism itself.
pub trait Surface: Clone {
    /// Registers a listener for `name` via the primary mechanism.
    ///
    /// Returns `false` when the surface does not support the primary
    /// mechanism at all (the caller then falls back).
    fn add_listener(&self, name: &str, listener: &Listener) -> bool;

    /// Removes a primary-mechanism registration.
    ///
    /// Returns `false` when the surface does not support the primary
    /// mechanism; removal of a listener that was never added is a no-op.
    fn remove_listener(&self, name: &str, listener: &Listener) -> bool;

    /// Sets or clears the single fallback listener slot for `name`.
    fn set_fallback_listener(&self, name: &str, listener: Option<Listener>);

    /// Drops every registration for `name`, across both mechanisms.
    fn clear_listeners(&self, name: &str);

    /// Delivers a synthetic signal to surface-level consumers.
    ///
    /// Returns `false` when a consumer cancelled the signal's default
    /// action. This is the seam a gesture engine emits taps/clicks through.
    fn dispatch(&self, signal: &SyntheticSignal) -> bool;

    /// Handle to the enclosing document-level target, used for pointer
    /// capture outside the surface. A surface with no enclosing document
    /// returns itself.
    fn document(&self) -> Self;
}
