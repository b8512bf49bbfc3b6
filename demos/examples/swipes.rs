// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipes and the drags that fail to be one.
//!
//! A moved release classifies as a swipe only when the dominant axis travels
//! far enough while the cross axis stays narrow; anything else is just a
//! drag that ends.
//!
//! Run:
//! - `cargo run -p tactile_demos --example swipes`

use tactile_binding::Surface as _;
use tactile_demos::narrated_tracker;
use tactile_host_ref::signals;

fn main() {
    let (surface, platform, _tracker) = narrated_tracker();

    println!("-- swipe right --");
    surface.deliver(&signals::touch_start(40.0, 100.0));
    for step in 1..=4 {
        platform.advance(16);
        surface.deliver(&signals::touch_move(40.0 + 20.0 * f64::from(step), 102.0));
    }
    platform.advance(16);
    surface.deliver(&signals::touch_end(130.0, 103.0));

    println!("-- swipe up --");
    platform.advance(500);
    surface.deliver(&signals::touch_start(100.0, 200.0));
    platform.advance(16);
    surface.deliver(&signals::touch_move(102.0, 150.0));
    platform.advance(16);
    surface.deliver(&signals::touch_end(103.0, 130.0));

    println!("-- diagonal drag: no swipe, just an end --");
    platform.advance(500);
    surface.deliver(&signals::touch_start(100.0, 100.0));
    platform.advance(16);
    surface.deliver(&signals::touch_move(130.0, 130.0));
    platform.advance(16);
    surface.deliver(&signals::touch_end(140.0, 140.0));

    println!("-- mouse drag with document capture --");
    platform.advance(500);
    surface.deliver(&signals::mouse_down(10.0, 10.0));
    // Once the pointer leaves the surface, the document keeps reporting.
    let document = surface.document();
    platform.advance(16);
    document.deliver(&signals::mouse_move(80.0, 12.0));
    platform.advance(16);
    document.deliver(&signals::mouse_up(95.0, 12.0));
}
