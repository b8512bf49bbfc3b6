// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture event vocabulary.

use core::fmt;

/// A higher-level gesture event produced by the engine.
///
/// [`Pressing`](Self::Pressing) is reserved: it is part of the vocabulary so
/// consumers can register for it, but the current engine never dispatches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureEvent {
    /// A contact went down on the surface.
    Start,
    /// The contact crossed the movement threshold for the first time.
    MoveStart,
    /// The contact moved while past the movement threshold.
    Moving,
    /// A moved contact was released.
    MoveEnd,
    /// Gesture processing for a release finished.
    End,
    /// A single quick release, after the classification window closed.
    Tap,
    /// Two quick releases inside overlapping classification windows.
    DblTap,
    /// Three or more quick releases inside overlapping windows.
    MltTap,
    /// A stationary contact held past the press duration.
    Press,
    /// Reserved; never dispatched.
    Pressing,
    /// A moved release dominated by leftward displacement.
    SwipeLeft,
    /// A moved release dominated by rightward displacement.
    SwipeRight,
    /// A moved release dominated by upward displacement.
    SwipeUp,
    /// A moved release dominated by downward displacement.
    SwipeDown,
}

impl GestureEvent {
    /// Every event the engine knows, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Start,
        Self::MoveStart,
        Self::Moving,
        Self::MoveEnd,
        Self::End,
        Self::Tap,
        Self::DblTap,
        Self::MltTap,
        Self::Press,
        Self::Pressing,
        Self::SwipeLeft,
        Self::SwipeRight,
        Self::SwipeUp,
        Self::SwipeDown,
    ];

    /// The event's wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::MoveStart => "moveStart",
            Self::Moving => "moving",
            Self::MoveEnd => "moveEnd",
            Self::End => "end",
            Self::Tap => "tap",
            Self::DblTap => "dblTap",
            Self::MltTap => "mltTap",
            Self::Press => "press",
            Self::Pressing => "pressing",
            Self::SwipeLeft => "swipeLeft",
            Self::SwipeRight => "swipeRight",
            Self::SwipeUp => "swipeUp",
            Self::SwipeDown => "swipeDown",
        }
    }
}

impl fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn wire_names_are_unique() {
        for (i, a) in GestureEvent::ALL.iter().enumerate() {
            for b in &GestureEvent::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str(), "{a:?} and {b:?} share a name");
            }
        }
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(GestureEvent::MoveStart.to_string(), "moveStart");
        assert_eq!(GestureEvent::SwipeDown.to_string(), "swipeDown");
    }
}
