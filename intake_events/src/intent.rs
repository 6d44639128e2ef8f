// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intents: context-mapped readings of raw events.

use alloc::string::String;
use kurbo::Point;

use crate::Mods;

/// An intermediate, context-mapped representation of a raw event.
///
/// Intents sit between raw [`InputEvent`](crate::InputEvent)s and final
/// [`Action`](crate::Action)s: a declarative rule table produces zero or more
/// of them per event, and the gesture recognizer consumes them alongside the
/// raw event. They are ephemeral and never persisted.
///
/// Pointer press/release intents carry a NaN position: the rule stage is
/// stateless and does not track the cursor, which belongs to the recognizer.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// The pointer moved.
    PointerMove {
        /// Absolute pointer position.
        pos: Point,
        /// Modifier state.
        mods: Mods,
    },
    /// A pointer button was pressed.
    PointerPress {
        /// Button id.
        code: i32,
        /// Pointer position (NaN at the mapping stage).
        pos: Point,
        /// Modifier state.
        mods: Mods,
        /// Rule-supplied label, e.g. `"Select"`.
        label: String,
    },
    /// A pointer button was released.
    PointerRelease {
        /// Button id.
        code: i32,
        /// Pointer position (NaN at the mapping stage).
        pos: Point,
        /// Modifier state.
        mods: Mods,
        /// Rule-supplied label, e.g. `"Select"`.
        label: String,
    },
    /// The scroll wheel moved.
    Scroll {
        /// Horizontal scroll amount.
        dx: f64,
        /// Vertical scroll amount.
        dy: f64,
        /// Modifier state.
        mods: Mods,
    },
    /// A key was pressed.
    KeyPress {
        /// Key id.
        code: i32,
        /// Modifier state.
        mods: Mods,
        /// Rule-supplied label, e.g. `"MoveForward"`.
        label: String,
    },
    /// A key was released.
    KeyRelease {
        /// Key id.
        code: i32,
        /// Modifier state.
        mods: Mods,
        /// Rule-supplied label.
        label: String,
    },
    /// An opaque, named command, e.g. `"Undo"` or `"Delete"`.
    Command {
        /// Command name.
        name: String,
    },
}
