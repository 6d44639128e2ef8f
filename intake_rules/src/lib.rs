// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intake Rules: a declarative table mapping raw events to intents.
//!
//! ## Overview
//!
//! A [`RuleSet`] is an ordered list of [`Rule`] records built once at startup
//! and read-only afterwards. Per raw event, [`RuleSet::map`] evaluates
//! **every** rule in registration order and collects **all** matches — not
//! first-match — into the output intent list. The table holds no other state:
//! the same event stream always maps to the same intent stream.
//!
//! The stage is optional. Deployments that want raw events straight in the
//! gesture recognizer simply don't wire a table; both modes are first-class
//! in `intake_system`.
//!
//! ## Rule kinds
//!
//! - Button rules match a specific button id in a [`Phase`]: press and
//!   release emit [`Intent::PointerPress`] / [`Intent::PointerRelease`], and
//!   the drag phase emits [`Intent::PointerMove`] for repeated reports of a
//!   held button.
//! - Cursor and scroll rules are unconditional passthroughs.
//! - Key rules match a key id on press (not auto-repeat) or release.
//! - Chord rules match a key id plus a required modifier key and fire a named
//!   [`Intent::Command`] on press only.
//!
//! ## Example
//!
//! ```rust
//! use intake_events::{InputEvent, Mods, WindowId, code, Intent};
//! use intake_rules::{Rule, RuleSet};
//!
//! let rules = RuleSet::new(vec![
//!     Rule::button_press(code::MOUSE_LEFT, "Select"),
//!     Rule::chord(code::KEY_LEFT_CONTROL, code::KEY_Z, "Undo"),
//! ]);
//!
//! let press = InputEvent::ButtonChanged {
//!     window: WindowId(1),
//!     t: 0.0,
//!     button: code::MOUSE_LEFT,
//!     pressed: true,
//!     repeat: false,
//!     mods: Mods::empty(),
//! };
//! let intents = rules.map(&press);
//! assert!(matches!(&intents[..], [Intent::PointerPress { label, .. }] if label == "Select"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use intake_events::{InputEvent, Intent, Mods, code};
use kurbo::Point;
use smallvec::SmallVec;

/// Per-event intent buffer. Rule matches per event are almost always 0–2, so
/// the common case stays off the heap.
pub type IntentBuffer = SmallVec<[Intent; 2]>;

/// Pointer position placeholder used by press/release intents: the mapping
/// stage is stateless and does not track the cursor.
const UNPLACED: Point = Point::new(f64::NAN, f64::NAN);

/// The part of a button or key lifecycle a rule matches.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// The initial press (auto-repeats excluded).
    Press,
    /// The release.
    Release,
    /// Repeated reports of a held button.
    Drag,
}

/// One declarative mapping rule.
///
/// Rules are plain immutable records assembled with the factory functions
/// below ([`Rule::button_press`], [`Rule::chord`], …) or written out as
/// literals.
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    /// Match a specific mouse button in a phase.
    Button {
        /// Button id to match.
        button: i32,
        /// Lifecycle phase to match.
        phase: Phase,
        /// Label attached to the emitted intent.
        label: String,
    },
    /// Unconditional passthrough of pointer motion.
    Cursor,
    /// Unconditional passthrough of scroll.
    Scroll,
    /// Match a specific key on press or release.
    Key {
        /// Key id to match.
        key: i32,
        /// Lifecycle phase to match ([`Phase::Drag`] never matches keys).
        phase: Phase,
        /// Label attached to the emitted intent.
        label: String,
    },
    /// Match a key plus a required held modifier; fires a named command on
    /// press only.
    Chord {
        /// Modifier key id (a shift/control/alt/super key).
        modifier: i32,
        /// Key id to match.
        key: i32,
        /// Command name attached to the emitted intent.
        command: String,
    },
}

impl Rule {
    /// A button rule firing on press.
    pub fn button_press(button: i32, label: impl Into<String>) -> Self {
        Self::Button { button, phase: Phase::Press, label: label.into() }
    }

    /// A button rule firing on release.
    pub fn button_release(button: i32, label: impl Into<String>) -> Self {
        Self::Button { button, phase: Phase::Release, label: label.into() }
    }

    /// A button rule firing on repeated reports of a held button.
    pub fn button_drag(button: i32, label: impl Into<String>) -> Self {
        Self::Button { button, phase: Phase::Drag, label: label.into() }
    }

    /// An unconditional pointer-motion passthrough rule.
    pub const fn cursor_move() -> Self {
        Self::Cursor
    }

    /// An unconditional scroll passthrough rule.
    pub const fn scroll() -> Self {
        Self::Scroll
    }

    /// A key rule firing on press (auto-repeats excluded).
    pub fn key_press(key: i32, label: impl Into<String>) -> Self {
        Self::Key { key, phase: Phase::Press, label: label.into() }
    }

    /// A key rule firing on release.
    pub fn key_release(key: i32, label: impl Into<String>) -> Self {
        Self::Key { key, phase: Phase::Release, label: label.into() }
    }

    /// A chord rule: `modifier` held, `key` pressed, fires `command`.
    pub fn chord(modifier: i32, key: i32, command: impl Into<String>) -> Self {
        Self::Chord { modifier, key, command: command.into() }
    }

    /// Evaluate this rule against one event, appending any match to `out`.
    fn try_emit(&self, event: &InputEvent, out: &mut IntentBuffer) {
        match (self, event) {
            (
                Self::Button { button, phase, label },
                &InputEvent::ButtonChanged { button: b, pressed, repeat, mods, .. },
            ) if *button == b => match phase {
                Phase::Press if pressed && !repeat => out.push(Intent::PointerPress {
                    code: b,
                    pos: UNPLACED,
                    mods,
                    label: label.clone(),
                }),
                Phase::Release if !pressed => out.push(Intent::PointerRelease {
                    code: b,
                    pos: UNPLACED,
                    mods,
                    label: label.clone(),
                }),
                Phase::Drag if pressed && repeat => {
                    out.push(Intent::PointerMove { pos: UNPLACED, mods });
                }
                _ => {}
            },
            (Self::Cursor, &InputEvent::PointerMoved { x, y, .. }) => {
                out.push(Intent::PointerMove { pos: Point::new(x, y), mods: Mods::empty() });
            }
            (Self::Scroll, &InputEvent::Scrolled { dx, dy, .. }) => {
                out.push(Intent::Scroll { dx, dy, mods: Mods::empty() });
            }
            (
                Self::Key { key, phase, label },
                &InputEvent::KeyChanged { key: k, pressed, repeat, mods, .. },
            ) if *key == k => match phase {
                Phase::Press if pressed && !repeat => {
                    out.push(Intent::KeyPress { code: k, mods, label: label.clone() });
                }
                Phase::Release if !pressed => {
                    out.push(Intent::KeyRelease { code: k, mods, label: label.clone() });
                }
                _ => {}
            },
            (
                Self::Chord { modifier, key, command },
                &InputEvent::KeyChanged { key: k, pressed, repeat, mods, .. },
            ) if *key == k && pressed && !repeat => {
                if modifier_flag(*modifier).is_some_and(|flag| mods.contains(flag)) {
                    out.push(Intent::Command { name: command.clone() });
                }
            }
            _ => {}
        }
    }
}

/// The modifier bit a given modifier key contributes to the event bitmask, or
/// `None` when the id is not a modifier key (such a chord never fires).
const fn modifier_flag(key: i32) -> Option<Mods> {
    match key {
        code::KEY_LEFT_SHIFT | code::KEY_RIGHT_SHIFT => Some(Mods::SHIFT),
        code::KEY_LEFT_CONTROL | code::KEY_RIGHT_CONTROL => Some(Mods::CONTROL),
        code::KEY_LEFT_ALT | code::KEY_RIGHT_ALT => Some(Mods::ALT),
        code::KEY_LEFT_SUPER | code::KEY_RIGHT_SUPER => Some(Mods::SUPER),
        _ => None,
    }
}

/// An ordered, immutable rule table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a table from rules in registration order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The default editor table: pointer select/drag labels, camera
    /// pan/rotate drags, scroll and cursor passthrough, common editing keys,
    /// undo/redo/save chords, and WASD fly labels.
    pub fn editor_default() -> Self {
        Self::new(alloc::vec![
            Rule::button_press(code::MOUSE_LEFT, "Select"),
            Rule::button_release(code::MOUSE_LEFT, "Select"),
            Rule::button_drag(code::MOUSE_LEFT, "DragSelect"),
            Rule::button_drag(code::MOUSE_MIDDLE, "Pan"),
            Rule::button_drag(code::MOUSE_RIGHT, "Rotate"),
            Rule::scroll(),
            Rule::cursor_move(),
            Rule::key_press(code::KEY_DELETE, "Delete"),
            Rule::key_press(code::KEY_BACKSPACE, "Delete"),
            Rule::chord(code::KEY_LEFT_CONTROL, code::KEY_Z, "Undo"),
            Rule::chord(code::KEY_LEFT_CONTROL, code::KEY_Y, "Redo"),
            Rule::chord(code::KEY_LEFT_CONTROL, code::KEY_S, "Save"),
            Rule::key_press(code::KEY_ESCAPE, "Cancel"),
            Rule::key_press(code::KEY_SPACE, "TogglePlay"),
            Rule::key_press(code::KEY_W, "MoveForward"),
            Rule::key_press(code::KEY_S, "MoveBack"),
            Rule::key_press(code::KEY_A, "MoveLeft"),
            Rule::key_press(code::KEY_D, "MoveRight"),
        ])
    }

    /// Map one raw event into zero or more intents.
    ///
    /// Every rule is evaluated, in registration order; all matches are
    /// collected.
    pub fn map(&self, event: &InputEvent) -> IntentBuffer {
        let mut out = IntentBuffer::new();
        for rule in &self.rules {
            rule.try_emit(event, &mut out);
        }
        out
    }

    /// The rules, in registration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use intake_events::WindowId;

    fn button(button: i32, pressed: bool, repeat: bool, mods: Mods) -> InputEvent {
        InputEvent::ButtonChanged { window: WindowId(1), t: 0.0, button, pressed, repeat, mods }
    }

    fn key(key: i32, pressed: bool, repeat: bool, mods: Mods) -> InputEvent {
        InputEvent::KeyChanged {
            window: WindowId(1),
            t: 0.0,
            key,
            scancode: 0,
            pressed,
            repeat,
            mods,
        }
    }

    #[test]
    fn button_phases_are_disjoint() {
        let rules = RuleSet::new(vec![
            Rule::button_press(code::MOUSE_LEFT, "Select"),
            Rule::button_release(code::MOUSE_LEFT, "Select"),
            Rule::button_drag(code::MOUSE_LEFT, "DragSelect"),
        ]);

        let on_press = rules.map(&button(code::MOUSE_LEFT, true, false, Mods::empty()));
        assert!(matches!(&on_press[..], [Intent::PointerPress { .. }]));

        let on_release = rules.map(&button(code::MOUSE_LEFT, false, false, Mods::empty()));
        assert!(matches!(&on_release[..], [Intent::PointerRelease { .. }]));

        let on_repeat = rules.map(&button(code::MOUSE_LEFT, true, true, Mods::empty()));
        assert!(matches!(&on_repeat[..], [Intent::PointerMove { .. }]));
    }

    #[test]
    fn button_rule_ignores_other_buttons() {
        let rules = RuleSet::new(vec![Rule::button_press(code::MOUSE_LEFT, "Select")]);
        let intents = rules.map(&button(code::MOUSE_RIGHT, true, false, Mods::empty()));
        assert!(intents.is_empty());
    }

    #[test]
    fn cursor_and_scroll_pass_through() {
        let rules = RuleSet::new(vec![Rule::cursor_move(), Rule::scroll()]);

        let moved = InputEvent::PointerMoved { window: WindowId(1), t: 0.0, x: 3.0, y: 4.0 };
        let intents = rules.map(&moved);
        assert!(
            matches!(&intents[..], [Intent::PointerMove { pos, .. }] if pos.x == 3.0 && pos.y == 4.0)
        );

        let scrolled = InputEvent::Scrolled { window: WindowId(1), t: 0.0, dx: 0.0, dy: -2.0 };
        let intents = rules.map(&scrolled);
        assert!(matches!(&intents[..], [Intent::Scroll { dy, .. }] if *dy == -2.0));
    }

    #[test]
    fn key_press_excludes_auto_repeat() {
        let rules = RuleSet::new(vec![Rule::key_press(code::KEY_W, "MoveForward")]);
        assert_eq!(rules.map(&key(code::KEY_W, true, false, Mods::empty())).len(), 1);
        assert!(rules.map(&key(code::KEY_W, true, true, Mods::empty())).is_empty());
        assert!(rules.map(&key(code::KEY_W, false, false, Mods::empty())).is_empty());
    }

    #[test]
    fn chord_requires_held_modifier_on_press_only() {
        let rules = RuleSet::new(vec![Rule::chord(code::KEY_LEFT_CONTROL, code::KEY_Z, "Undo")]);

        let fired = rules.map(&key(code::KEY_Z, true, false, Mods::CONTROL));
        assert!(matches!(&fired[..], [Intent::Command { name }] if name == "Undo"));

        assert!(rules.map(&key(code::KEY_Z, true, false, Mods::empty())).is_empty());
        assert!(rules.map(&key(code::KEY_Z, true, true, Mods::CONTROL)).is_empty());
        assert!(rules.map(&key(code::KEY_Z, false, false, Mods::CONTROL)).is_empty());
    }

    #[test]
    fn chord_with_non_modifier_key_never_fires() {
        let rules = RuleSet::new(vec![Rule::chord(code::KEY_W, code::KEY_Z, "Nonsense")]);
        assert!(rules.map(&key(code::KEY_Z, true, false, Mods::all())).is_empty());
    }

    #[test]
    fn all_matches_collected_in_registration_order() {
        let rules = RuleSet::new(vec![
            Rule::key_press(code::KEY_DELETE, "First"),
            Rule::key_press(code::KEY_DELETE, "Second"),
        ]);
        let intents = rules.map(&key(code::KEY_DELETE, true, false, Mods::empty()));
        assert!(matches!(
            &intents[..],
            [Intent::KeyPress { label: a, .. }, Intent::KeyPress { label: b, .. }]
                if a == "First" && b == "Second"
        ));
    }

    #[test]
    fn editor_default_maps_undo_chord() {
        let rules = RuleSet::editor_default();
        let intents = rules.map(&key(code::KEY_Z, true, false, Mods::CONTROL));
        assert!(matches!(&intents[..], [Intent::Command { name }] if name == "Undo"));
    }

    #[test]
    fn editor_default_left_press_is_select() {
        let rules = RuleSet::editor_default();
        let intents = rules.map(&button(code::MOUSE_LEFT, true, false, Mods::empty()));
        assert!(matches!(&intents[..], [Intent::PointerPress { label, .. }] if label == "Select"));
    }
}
