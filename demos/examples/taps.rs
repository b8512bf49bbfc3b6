// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap, double tap, and press.
//!
//! Drive scripted touch traces through a tracker and watch stationary
//! releases classify once the quiet window closes.
//!
//! Run:
//! - `cargo run -p tactile_demos --example taps`

use tactile_demos::{narrated_tracker, report_synthetics, settle};
use tactile_host_ref::signals;

fn main() {
    let (surface, platform, tracker) = narrated_tracker();

    println!("-- single tap --");
    surface.deliver(&signals::touch_start(40.0, 40.0));
    platform.advance(70);
    surface.deliver(&signals::touch_end(41.0, 40.0));
    settle(&platform, &tracker);
    report_synthetics(&surface);

    println!("-- double tap --");
    platform.advance(500);
    surface.deliver(&signals::touch_start(40.0, 40.0));
    platform.advance(40);
    surface.deliver(&signals::touch_end(40.0, 40.0));
    platform.advance(90);
    surface.deliver(&signals::touch_start(42.0, 41.0));
    platform.advance(40);
    surface.deliver(&signals::touch_end(42.0, 41.0));
    settle(&platform, &tracker);

    println!("-- press (held past 200 ms) --");
    platform.advance(500);
    surface.deliver(&signals::touch_start(80.0, 40.0));
    platform.advance(320);
    surface.deliver(&signals::touch_end(80.0, 40.0));
    settle(&platform, &tracker);
}
