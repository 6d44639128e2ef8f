// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full pipeline walkthrough: editor rule set in front of the recognizer.
//!
//! Scripts a short editing session — click, double-click, drag, orbit,
//! scroll-zoom, an undo chord, and a quit — and prints every action the
//! pipeline dispatches. A real host would enqueue from its platform
//! callbacks instead of a script and react to the actions in its frame loop.
//!
//! Run:
//! - `cargo run -p intake_demos --example editor_session`
//! - `RUST_LOG=trace cargo run -p intake_demos --example editor_session` to
//!   see the orchestrator's drain tracing.

use intake_events::{InputEvent, Mods, WindowId, code};
use intake_rules::RuleSet;
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

fn key(t: f64, key: i32, pressed: bool, mods: Mods) -> InputEvent {
    InputEvent::KeyChanged { window: WINDOW, t, key, scancode: 0, pressed, repeat: false, mods }
}

fn session_script() -> Vec<InputEvent> {
    vec![
        // Move to the object and click it.
        mv(0.9, 120.0, 80.0),
        button(1.0, code::MOUSE_LEFT, true),
        button(1.1, code::MOUSE_LEFT, false),
        // A second quick click makes a double.
        button(1.2, code::MOUSE_LEFT, true),
        button(1.25, code::MOUSE_LEFT, false),
        // Drag it to the right.
        button(1.4, code::MOUSE_LEFT, true),
        mv(1.5, 160.0, 80.0),
        mv(1.6, 200.0, 95.0),
        button(1.9, code::MOUSE_LEFT, false),
        // Hold Alt to orbit the camera, wiggle, let go.
        key(2.0, code::KEY_LEFT_ALT, true, Mods::ALT),
        mv(2.1, 210.0, 110.0),
        key(2.3, code::KEY_LEFT_ALT, false, Mods::empty()),
        // Wheel out, undo the edit, quit.
        InputEvent::Scrolled { window: WINDOW, t: 2.4, dx: 0.0, dy: -2.0 },
        key(2.5, code::KEY_Z, true, Mods::CONTROL),
        key(2.7, code::KEY_ESCAPE, true, Mods::empty()),
    ]
}

fn main() {
    env_logger::init();

    let mut system = InputSystem::with_rules(RuleSet::editor_default());

    for event in session_script() {
        system.enqueue(event);
    }

    // One frame drains the whole script.
    let mut total = 0_usize;
    system.update(1.0 / 60.0, |action| {
        total += 1;
        println!(
            "{:>12} pos=({:6.1},{:6.1}) code={:3} delta=({:6.1},{:6.1}) val={:?}",
            format!("{:?}", action.kind),
            action.pos.x,
            action.pos.y,
            action.code,
            action.delta.x,
            action.delta.y,
            action.val,
        );
    });
    log::info!("session dispatched {total} actions");
}
