// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for the gesture engine.
//!
//! The engine intentionally does not log. For embedders that want to answer
//! questions like "why did this release classify as a swipe?" there is a
//! minimal, additive hook instead: install a [`GestureTrace`] sink and the
//! engine reports every phase transition and every dispatch it performs.
//!
//! [`TraceRecorder`] is a small ready-made sink that stores observations in
//! order; tests and debugging sessions share it with the engine through an
//! `Rc<RefCell<…>>` handle.

use alloc::vec::Vec;

use crate::events::GestureEvent;

/// Coarse summary of the engine's state, as reported to trace sinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    /// No gesture in progress.
    Idle,
    /// A contact is down, still under the movement threshold.
    Tracking,
    /// A contact is down and past the movement threshold.
    Moving,
}

/// A callback sink observing engine activity.
pub trait GestureTrace {
    /// Called when the engine's phase summary changes.
    fn transition(&mut self, from: PhaseKind, to: PhaseKind);

    /// Called after each dispatch, with whether a handler cancelled it.
    fn dispatched(&mut self, event: GestureEvent, cancelled: bool);
}

/// One recorded observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEntry {
    /// A phase change.
    Transition {
        /// Phase before the change.
        from: PhaseKind,
        /// Phase after the change.
        to: PhaseKind,
    },
    /// A dispatch through the registry.
    Dispatched {
        /// The event that was dispatched.
        event: GestureEvent,
        /// Whether a handler cancelled it.
        cancelled: bool,
    },
}

/// Records every observation in order.
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    entries: Vec<TraceEntry>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The observations recorded so far, oldest first.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Just the dispatched events, oldest first.
    pub fn events(&self) -> Vec<GestureEvent> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                TraceEntry::Dispatched { event, .. } => Some(*event),
                TraceEntry::Transition { .. } => None,
            })
            .collect()
    }

    /// Drops all recorded observations.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl GestureTrace for TraceRecorder {
    fn transition(&mut self, from: PhaseKind, to: PhaseKind) {
        self.entries.push(TraceEntry::Transition { from, to });
    }

    fn dispatched(&mut self, event: GestureEvent, cancelled: bool) {
        self.entries.push(TraceEntry::Dispatched { event, cancelled });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn recorder_keeps_observation_order() {
        let mut recorder = TraceRecorder::new();
        recorder.transition(PhaseKind::Idle, PhaseKind::Tracking);
        recorder.dispatched(GestureEvent::Start, false);
        recorder.transition(PhaseKind::Tracking, PhaseKind::Idle);

        assert_eq!(
            recorder.entries(),
            [
                TraceEntry::Transition {
                    from: PhaseKind::Idle,
                    to: PhaseKind::Tracking,
                },
                TraceEntry::Dispatched {
                    event: GestureEvent::Start,
                    cancelled: false,
                },
                TraceEntry::Transition {
                    from: PhaseKind::Tracking,
                    to: PhaseKind::Idle,
                },
            ]
        );
        assert_eq!(recorder.events(), vec![GestureEvent::Start]);
    }

    #[test]
    fn clear_resets_the_recorder() {
        let mut recorder = TraceRecorder::new();
        recorder.dispatched(GestureEvent::Tap, true);
        recorder.clear();
        assert!(recorder.entries().is_empty());
    }
}
