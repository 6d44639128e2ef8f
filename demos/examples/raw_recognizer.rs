// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapper-less wiring: raw events straight into the gesture recognizer.
//!
//! Deployments that don't need a declarative rule table skip the intent
//! stage entirely. This script drives a first-person-style session — passive
//! look motion, a right-click, keyboard pan and zoom pulses, fly keys — with
//! a recognizer built on custom thresholds.
//!
//! Run:
//! - `cargo run -p intake_demos --example raw_recognizer`

use intake_events::{InputEvent, Mods, WindowId, code};
use intake_gesture::{GestureRecognizer, Thresholds};
use intake_system::InputSystem;

const WINDOW: WindowId = WindowId(1);

fn mv(t: f64, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMoved { window: WINDOW, t, x, y }
}

fn button(t: f64, button: i32, pressed: bool) -> InputEvent {
    InputEvent::ButtonChanged {
        window: WINDOW,
        t,
        button,
        pressed,
        repeat: false,
        mods: Mods::empty(),
    }
}

fn key(t: f64, key: i32, pressed: bool, repeat: bool) -> InputEvent {
    InputEvent::KeyChanged {
        window: WINDOW,
        t,
        key,
        scancode: 0,
        pressed,
        repeat,
        mods: Mods::empty(),
    }
}

fn look_script() -> Vec<InputEvent> {
    vec![
        // Passive look motion streams MouseMove deltas.
        mv(0.1, 10.0, 5.0),
        mv(0.2, 25.0, 12.0),
        mv(0.3, 32.0, 20.0),
        // A quick right-click opens the host's context menu.
        button(0.5, code::MOUSE_RIGHT, true),
        button(0.6, code::MOUSE_RIGHT, false),
        // Keyboard pan: held left arrow pulses once per repeat.
        key(1.0, code::KEY_LEFT, true, false),
        key(1.05, code::KEY_LEFT, true, true),
        key(1.1, code::KEY_LEFT, true, true),
        key(1.15, code::KEY_LEFT, false, false),
        // Zoom out a step, fly forward, strafe.
        key(1.3, code::KEY_PAGE_DOWN, true, false),
        key(1.5, code::KEY_W, true, false),
        key(1.6, code::KEY_A, true, false),
        // Reset the camera, then quit.
        key(1.8, code::KEY_1, true, false),
        key(2.0, code::KEY_ESCAPE, true, false),
    ]
}

fn main() {
    env_logger::init();

    // A fly-style host wants coarser keyboard steps than the defaults.
    let recognizer = GestureRecognizer::new(Thresholds {
        key_pan_step: 24.0,
        key_zoom_step: 2.0,
        ..Thresholds::default()
    });
    let mut system = InputSystem::with_recognizer(recognizer);

    for event in look_script() {
        system.enqueue(event);
    }

    let mut total = 0_usize;
    system.update(1.0 / 60.0, |action| {
        total += 1;
        println!(
            "{:>12} pos=({:6.1},{:6.1}) delta=({:6.1},{:6.1}) val={:?}",
            format!("{:?}", action.kind),
            action.pos.x,
            action.pos.y,
            action.delta.x,
            action.delta.y,
            action.val,
        );
    });
    log::info!("session dispatched {total} actions");
}
