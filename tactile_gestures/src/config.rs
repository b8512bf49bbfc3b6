// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification thresholds.

/// Thresholds the engine classifies against, in device pixels and
/// milliseconds.
///
/// All comparisons are strict: a displacement must *exceed*
/// [`move_threshold`](Self::move_threshold) on an axis to count as movement,
/// a dominant-axis displacement must exceed
/// [`swipe_distance`](Self::swipe_distance) while the cross axis stays
/// strictly under [`swipe_cross_limit`](Self::swipe_cross_limit), and a hold
/// must outlast [`press_duration_ms`](Self::press_duration_ms) to become a
/// press rather than a tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Per-axis displacement (absolute) a contact must exceed to count as a move.
    pub move_threshold: f64,
    /// Signed dominant-axis displacement a moved release must exceed to swipe.
    pub swipe_distance: f64,
    /// Absolute cross-axis displacement a swipe must stay under.
    pub swipe_cross_limit: f64,
    /// Hold duration separating a press from a tap candidate.
    pub press_duration_ms: u64,
    /// Quiet window after a quick release before tap classification runs.
    pub tap_window_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            move_threshold: 5.0,
            swipe_distance: 50.0,
            swipe_cross_limit: 20.0,
            press_duration_ms: 200,
            tap_window_ms: 200,
        }
    }
}
