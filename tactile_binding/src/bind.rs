// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attach/detach utilities over [`Surface`] targets.
//!
//! One logical signal group often spans several native names (for example a
//! "start" group of `"touchstart mousedown"`). These helpers expand
//! space-separated name lists and batch maps so callers express intent once
//! and the minimal per-name attach/detach happens here.

use crate::signal::Listener;
use crate::surface::Surface;

/// Binds `listener` once per space-separated name in `names`.
///
/// A blank or whitespace-only `names` is a silent no-op. Each name is first
/// attached through the surface's primary mechanism; when the surface lacks
/// one, the single-slot fallback is used instead.
pub fn bind<S: Surface>(target: &S, names: &str, listener: &Listener) {
    for name in names.split_whitespace() {
        if !target.add_listener(name, listener) {
            target.set_fallback_listener(name, Some(listener.clone()));
        }
    }
}

/// Batch form of [`bind`]: each entry is a name list with its own listener.
pub fn bind_map<S: Surface>(target: &S, entries: &[(&str, &Listener)]) {
    for (names, listener) in entries {
        bind(target, names, listener);
    }
}

/// Unbinds per space-separated name in `names`.
///
/// With a listener, that registration is removed (falling back to clearing
/// the fallback slot on surfaces without the primary mechanism). With
/// `None`, every registration for each name is dropped.
pub fn unbind<S: Surface>(target: &S, names: &str, listener: Option<&Listener>) {
    for name in names.split_whitespace() {
        match listener {
            Some(listener) => {
                if !target.remove_listener(name, listener) {
                    target.set_fallback_listener(name, None);
                }
            }
            None => target.clear_listeners(name),
        }
    }
}

/// Batch form of [`unbind`] for entries that carry their listener.
pub fn unbind_map<S: Surface>(target: &S, entries: &[(&str, &Listener)]) {
    for (names, listener) in entries {
        unbind(target, names, Some(listener));
    }
}
