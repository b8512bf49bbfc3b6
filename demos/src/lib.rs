// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared plumbing for the Tactile demos.
//!
//! Every demo drives a scripted trace of raw signals through the in-memory
//! reference host and narrates what the engine makes of it.

use tactile_gestures::{GestureEvent, GestureTracker, Outcome, handler};
use tactile_host_ref::{ManualPlatform, MemorySurface, run_pending_timer};

/// The tracker type all demos use.
pub type DemoTracker = GestureTracker<MemorySurface, ManualPlatform>;

/// Builds a surface/platform/tracker triple and narrates every gesture event
/// to stdout.
pub fn narrated_tracker() -> (MemorySurface, ManualPlatform, DemoTracker) {
    let surface = MemorySurface::new();
    let platform = ManualPlatform::new();
    let tracker = GestureTracker::new(surface.clone(), platform.clone());

    for event in GestureEvent::ALL {
        let clock = platform.clone();
        tracker.on(
            event,
            handler(move |context, contact| {
                let position = contact.position;
                match context.displacement {
                    Some(delta) if matters_for_movement(event) => println!(
                        "  [{:>4} ms] {:<10} at ({:.0}, {:.0})  displacement ({:+.0}, {:+.0})",
                        clock.now(),
                        event,
                        position.x,
                        position.y,
                        delta.x,
                        delta.y,
                    ),
                    _ => println!(
                        "  [{:>4} ms] {:<10} at ({:.0}, {:.0})",
                        clock.now(),
                        event,
                        position.x,
                        position.y,
                    ),
                }
                Outcome::Continue
            }),
        );
    }

    (surface, platform, tracker)
}

fn matters_for_movement(event: GestureEvent) -> bool {
    matches!(
        event,
        GestureEvent::Moving
            | GestureEvent::MoveEnd
            | GestureEvent::SwipeLeft
            | GestureEvent::SwipeRight
            | GestureEvent::SwipeUp
            | GestureEvent::SwipeDown
    )
}

/// Lets the pending tap-classification window (if any) elapse and fire.
pub fn settle(platform: &ManualPlatform, tracker: &DemoTracker) {
    if let Some(deadline) = platform.armed_deadline() {
        if platform.now() < deadline {
            platform.set_now(deadline);
        }
        let _ = run_pending_timer(platform, tracker);
    }
}

/// Prints the synthetic signals the surface observed.
pub fn report_synthetics(surface: &MemorySurface) {
    let recorded = surface.synthetics();
    if recorded.is_empty() {
        println!("  (no synthetic signals)");
        return;
    }
    for signal in recorded {
        println!(
            "  synthetic {:<9} at ({:.0}, {:.0})",
            signal.name, signal.position.x, signal.position.y
        );
    }
}
