// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification state machine.

use alloc::string::String;
use alloc::vec::Vec;

use intake_events::{Action, ActionKind, InputEvent, Intent, Mods, code};
use kurbo::{Point, Vec2};

/// Timing and distance thresholds for gesture classification.
///
/// Thresholds are injected at construction rather than read from globals, so
/// the state machine can be driven with synthetic clocks in tests.
/// [`Thresholds::default`] carries the exact compatibility values consumers
/// are calibrated against.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Thresholds {
    /// Maximum press duration of a click, in seconds.
    pub click_time: f64,
    /// Maximum press-to-release displacement of a click, in pixels.
    pub click_dist: f64,
    /// Maximum spacing between two click releases forming a double-click, in
    /// seconds.
    pub double_click_time: f64,
    /// Maximum press duration of a right-click, in seconds.
    pub right_click_window: f64,
    /// Pan distance synthesized per arrow-key pulse.
    pub key_pan_step: f64,
    /// Zoom amount synthesized per zoom-key pulse.
    pub key_zoom_step: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            click_time: 0.20,
            click_dist: 5.0,
            double_click_time: 0.30,
            right_click_window: 0.40,
            key_pan_step: 10.0,
            key_zoom_step: 1.0,
        }
    }
}

/// `last_click_time` value meaning "no recent click": far enough in the past
/// that a first click near `t = 0` cannot read as the second half of a double.
const NO_RECENT_CLICK: f64 = -10.0;

/// Press session of the primary button.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct PressState {
    down: bool,
    time: f64,
    origin: Point,
}

/// The gesture recognition state machine.
///
/// Feed it every raw event (and that event's mapped intents, when a rule
/// stage is wired in) via [`process`](Self::process); it emits zero or more
/// actions per call, in emission order. State persists for the lifetime of
/// the input subsystem and is mutated only from the frame-loop thread.
///
/// A release with no matching prior press evaluates against default press
/// state rather than failing; unrecognized ids are silently ignored.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    thresholds: Thresholds,
    press: PressState,
    cursor: Point,
    accum: Vec2,
    last_click_time: f64,
    orbit_held: bool,
    right_press_time: f64,
}

impl GestureRecognizer {
    /// A recognizer using the given thresholds.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            press: PressState::default(),
            cursor: Point::ORIGIN,
            accum: Vec2::ZERO,
            last_click_time: NO_RECENT_CLICK,
            orbit_held: false,
            right_press_time: 0.0,
        }
    }

    /// The thresholds this recognizer was built with.
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Last known cursor position.
    pub const fn cursor(&self) -> Point {
        self.cursor
    }

    /// Whether a primary-button press session is active.
    pub const fn is_pressed(&self) -> bool {
        self.press.down
    }

    /// Whether a modifier-held orbit session is active.
    pub const fn orbit_held(&self) -> bool {
        self.orbit_held
    }

    /// Consume one raw event plus its mapped intents, emitting actions in
    /// order.
    pub fn process(&mut self, event: &InputEvent, intents: &[Intent]) -> Vec<Action> {
        let mut out = Vec::new();
        match *event {
            InputEvent::PointerMoved { x, y, .. } => {
                self.on_pointer_moved(Point::new(x, y), &mut out);
            }
            InputEvent::ButtonChanged { t, button, pressed, repeat, mods, .. } => {
                self.on_button(t, button, pressed, repeat, mods, &mut out);
            }
            InputEvent::Scrolled { dy, .. } => {
                out.push(Action {
                    pos: self.cursor,
                    delta: Vec2::new(0.0, dy),
                    ..Action::new(ActionKind::Zoom)
                });
            }
            InputEvent::KeyChanged { key, pressed, mods, .. } => {
                self.on_key(key, pressed, mods, &mut out);
            }
        }
        for intent in intents {
            if let Intent::Command { name } = intent {
                out.push(command_action(name));
            }
        }
        out
    }

    /// Time hook run once per frame after the event queue drains.
    ///
    /// Emits nothing today; long-press and timeout gestures belong here.
    pub fn tick(&mut self, _dt: f64) -> Vec<Action> {
        Vec::new()
    }

    fn on_pointer_moved(&mut self, pos: Point, out: &mut Vec<Action>) {
        self.accum += pos - self.cursor;
        self.cursor = pos;
        if self.press.down {
            // Sub-threshold motion accumulates silently, so the drag-delta
            // sum stays exact once updates start flowing.
            if self.cursor.distance(self.press.origin) >= self.thresholds.click_dist {
                out.push(Action {
                    pos: self.cursor,
                    code: code::MOUSE_LEFT,
                    delta: self.accum,
                    ..Action::new(ActionKind::DragUpdate)
                });
                self.accum = Vec2::ZERO;
            }
        } else {
            out.push(Action {
                pos: self.cursor,
                delta: self.accum,
                ..Action::new(ActionKind::MouseMove)
            });
            self.accum = Vec2::ZERO;
        }
    }

    fn on_button(
        &mut self,
        t: f64,
        button: i32,
        pressed: bool,
        repeat: bool,
        mods: Mods,
        out: &mut Vec<Action>,
    ) {
        if button == code::MOUSE_LEFT {
            if pressed {
                // Repeated reports of a held button feed drag-phase rules;
                // they must not restart the session or zero the accumulator.
                if !repeat {
                    self.press = PressState { down: true, time: t, origin: self.cursor };
                    self.accum = Vec2::ZERO;
                }
            } else {
                let small_move =
                    self.cursor.distance(self.press.origin) < self.thresholds.click_dist;
                let held = t - self.press.time;
                if small_move && held < self.thresholds.click_time {
                    if t - self.last_click_time < self.thresholds.double_click_time {
                        out.push(Action {
                            pos: self.cursor,
                            code: button,
                            mods,
                            ..Action::new(ActionKind::DoubleClick)
                        });
                        self.last_click_time = NO_RECENT_CLICK;
                    } else {
                        out.push(Action {
                            pos: self.cursor,
                            code: button,
                            mods,
                            ..Action::new(ActionKind::Click)
                        });
                        self.last_click_time = t;
                    }
                } else {
                    out.push(Action {
                        pos: self.cursor,
                        code: button,
                        mods,
                        ..Action::new(ActionKind::DragEnd)
                    });
                }
                self.press.down = false;
                self.accum = Vec2::ZERO;
            }
        } else if button == code::MOUSE_RIGHT {
            if pressed {
                if !repeat {
                    self.right_press_time = t;
                }
            } else if t - self.right_press_time < self.thresholds.right_click_window {
                out.push(Action { pos: self.cursor, ..Action::new(ActionKind::RightClick) });
            }
        }
    }

    fn on_key(&mut self, key: i32, pressed: bool, mods: Mods, out: &mut Vec<Action>) {
        // Alt held on either side toggles the orbit session. Key-repeat
        // lands in the already-held branch, so duplicate starts are
        // impossible.
        if key == code::KEY_LEFT_ALT || key == code::KEY_RIGHT_ALT {
            if pressed {
                if !self.orbit_held {
                    self.orbit_held = true;
                    out.push(Action {
                        pos: self.cursor,
                        mods,
                        ..Action::new(ActionKind::OrbitStart)
                    });
                }
            } else if self.orbit_held {
                self.orbit_held = false;
                out.push(Action { pos: self.cursor, mods, ..Action::new(ActionKind::OrbitEnd) });
            }
        }

        // Everything below fires on press and on key-repeat.
        if !pressed {
            return;
        }

        let pan = self.thresholds.key_pan_step;
        let pulse = match key {
            code::KEY_LEFT => Some(Vec2::new(-pan, 0.0)),
            code::KEY_RIGHT => Some(Vec2::new(pan, 0.0)),
            // Up is negative y, screen convention.
            code::KEY_UP => Some(Vec2::new(0.0, -pan)),
            code::KEY_DOWN => Some(Vec2::new(0.0, pan)),
            _ => None,
        };
        if let Some(delta) = pulse {
            out.push(Action {
                pos: self.cursor,
                mods,
                delta,
                ..Action::new(ActionKind::DragUpdate)
            });
        }

        let zoom = self.thresholds.key_zoom_step;
        match key {
            code::KEY_PAGE_UP | code::KEY_EQUAL | code::KEY_KP_ADD => {
                out.push(Action {
                    pos: self.cursor,
                    mods,
                    delta: Vec2::new(0.0, -zoom),
                    ..Action::new(ActionKind::Zoom)
                });
            }
            code::KEY_PAGE_DOWN | code::KEY_MINUS | code::KEY_KP_SUBTRACT => {
                out.push(Action {
                    pos: self.cursor,
                    mods,
                    delta: Vec2::new(0.0, zoom),
                    ..Action::new(ActionKind::Zoom)
                });
            }
            // Shutdown fires regardless of in-progress drag or orbit
            // sessions; no compensating DragEnd/OrbitEnd is emitted.
            code::KEY_ESCAPE => out.push(Action::new(ActionKind::Shutdown)),
            code::KEY_1 => {
                // The camera-reset key also discards any pending look delta.
                self.accum = Vec2::ZERO;
                out.push(key_action("1"));
            }
            code::KEY_W => out.push(key_action("w")),
            code::KEY_S => out.push(key_action("s")),
            code::KEY_A => out.push(key_action("a")),
            code::KEY_D => out.push(key_action("d")),
            code::KEY_R => out.push(key_action("r")),
            code::KEY_F => out.push(key_action("f")),
            _ => {}
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}

fn key_action(label: &str) -> Action {
    Action { val: String::from(label), ..Action::new(ActionKind::Key) }
}

/// Surface a named command intent as an action: the five editing names map to
/// their kinds, any other name rides a generic `Key` action for the host.
fn command_action(name: &str) -> Action {
    let kind = match name {
        "Select" => ActionKind::Select,
        "Delete" => ActionKind::Delete,
        "Duplicate" => ActionKind::Duplicate,
        "Confirm" => ActionKind::Confirm,
        "Cancel" => ActionKind::Cancel,
        _ => return Action { val: String::from(name), ..Action::new(ActionKind::Key) },
    };
    Action::new(kind)
}
