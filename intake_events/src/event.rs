// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input events as reported by the platform layer.

use crate::Mods;

/// Identifier of the window (or other event source) an event came from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WindowId(pub u64);

/// A raw, timestamped input record.
///
/// Events are immutable: the platform layer creates them, the frame loop
/// consumes them exactly once. The timestamp `t` is in seconds and is
/// monotonically non-decreasing per source; the pipeline never reads a clock
/// of its own, which keeps every downstream state machine testable with
/// synthetic timestamps.
///
/// The set of kinds is closed by design — consumers dispatch with exhaustive
/// `match`, so adding a kind is a compile-time-checked change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to an absolute position in window coordinates.
    PointerMoved {
        /// Source window.
        window: WindowId,
        /// Timestamp in seconds.
        t: f64,
        /// Absolute x position in pixels.
        x: f64,
        /// Absolute y position in pixels (down is positive, screen convention).
        y: f64,
    },
    /// A mouse button went down or up.
    ButtonChanged {
        /// Source window.
        window: WindowId,
        /// Timestamp in seconds.
        t: f64,
        /// Button id (see [`crate::code`]).
        button: i32,
        /// `true` on press, `false` on release.
        pressed: bool,
        /// `true` when the platform re-reports a held button. Stock platforms
        /// never do this for mouse buttons; adapters pass `false`.
        repeat: bool,
        /// Modifier state at the time of the change.
        mods: Mods,
    },
    /// The scroll wheel (or trackpad scroll) moved.
    Scrolled {
        /// Source window.
        window: WindowId,
        /// Timestamp in seconds.
        t: f64,
        /// Horizontal scroll amount.
        dx: f64,
        /// Vertical scroll amount.
        dy: f64,
    },
    /// A keyboard key went down, repeated, or went up.
    KeyChanged {
        /// Source window.
        window: WindowId,
        /// Timestamp in seconds.
        t: f64,
        /// Key id (see [`crate::code`]).
        key: i32,
        /// Platform scancode, carried through for hosts that need it.
        scancode: i32,
        /// `true` on press and on repeat, `false` on release.
        pressed: bool,
        /// `true` when this is an auto-repeat of a held key.
        repeat: bool,
        /// Modifier state at the time of the change.
        mods: Mods,
    },
}

impl InputEvent {
    /// The window this event originated from.
    pub const fn window(&self) -> WindowId {
        match *self {
            Self::PointerMoved { window, .. }
            | Self::ButtonChanged { window, .. }
            | Self::Scrolled { window, .. }
            | Self::KeyChanged { window, .. } => window,
        }
    }

    /// The event timestamp, in seconds.
    pub const fn time(&self) -> f64 {
        match *self {
            Self::PointerMoved { t, .. }
            | Self::ButtonChanged { t, .. }
            | Self::Scrolled { t, .. }
            | Self::KeyChanged { t, .. } => t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code;

    #[test]
    fn accessors_span_all_variants() {
        let w = WindowId(7);
        let events = [
            InputEvent::PointerMoved { window: w, t: 0.5, x: 1.0, y: 2.0 },
            InputEvent::ButtonChanged {
                window: w,
                t: 1.5,
                button: code::MOUSE_LEFT,
                pressed: true,
                repeat: false,
                mods: Mods::empty(),
            },
            InputEvent::Scrolled { window: w, t: 2.5, dx: 0.0, dy: 1.0 },
            InputEvent::KeyChanged {
                window: w,
                t: 3.5,
                key: code::KEY_W,
                scancode: 17,
                pressed: true,
                repeat: false,
                mods: Mods::SHIFT,
            },
        ];
        let times: alloc::vec::Vec<f64> = events.iter().map(InputEvent::time).collect();
        assert_eq!(times, [0.5, 1.5, 2.5, 3.5]);
        assert!(events.iter().all(|e| e.window() == w));
    }
}
