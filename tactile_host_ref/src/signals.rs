// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shorthand constructors for the raw signals Tactile binds.
//!
//! Touch-shaped signals carry their coordinates in the changed-point list
//! (the position field stays at the origin, as real touch signals do not
//! carry one); mouse-shaped signals carry the position directly.

use kurbo::Point;
use tactile_binding::RawSignal;

fn touch(name: &'static str, x: f64, y: f64) -> RawSignal {
    RawSignal::new(name, Point::ZERO).with_changed_points([Point::new(x, y)])
}

/// A `touchstart` at `(x, y)`.
pub fn touch_start(x: f64, y: f64) -> RawSignal {
    touch("touchstart", x, y)
}

/// A `touchmove` at `(x, y)`.
pub fn touch_move(x: f64, y: f64) -> RawSignal {
    touch("touchmove", x, y)
}

/// A `touchend` at `(x, y)`.
pub fn touch_end(x: f64, y: f64) -> RawSignal {
    touch("touchend", x, y)
}

/// A `touchcancel` at `(x, y)`.
pub fn touch_cancel(x: f64, y: f64) -> RawSignal {
    touch("touchcancel", x, y)
}

/// A `mousedown` at `(x, y)`.
pub fn mouse_down(x: f64, y: f64) -> RawSignal {
    RawSignal::new("mousedown", Point::new(x, y))
}

/// A `mousemove` at `(x, y)`.
pub fn mouse_move(x: f64, y: f64) -> RawSignal {
    RawSignal::new("mousemove", Point::new(x, y))
}

/// A `mouseup` at `(x, y)`.
pub fn mouse_up(x: f64, y: f64) -> RawSignal {
    RawSignal::new("mouseup", Point::new(x, y))
}
