// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical button and key ids.
//!
//! The pipeline addresses buttons and keys as plain `i32` values in a
//! GLFW-compatible id space. Only the ids that the gesture recognizer or the
//! default rule table name are listed; any other id flows through the pipeline
//! untouched. A `code` of `-1` on an emitted action marks it as synthetic
//! (not tied to a concrete button or key).

/// Left mouse button, the primary gesture button.
pub const MOUSE_LEFT: i32 = 0;
/// Right mouse button.
pub const MOUSE_RIGHT: i32 = 1;
/// Middle mouse button.
pub const MOUSE_MIDDLE: i32 = 2;

/// Space bar.
pub const KEY_SPACE: i32 = 32;
/// `-` in the main key block.
pub const KEY_MINUS: i32 = 45;
/// Digit `1` in the main key block.
pub const KEY_1: i32 = 49;
/// `=` in the main key block (unshifted `+` on common layouts).
pub const KEY_EQUAL: i32 = 61;

/// Letter `A`.
pub const KEY_A: i32 = 65;
/// Letter `D`.
pub const KEY_D: i32 = 68;
/// Letter `F`.
pub const KEY_F: i32 = 70;
/// Letter `R`.
pub const KEY_R: i32 = 82;
/// Letter `S`.
pub const KEY_S: i32 = 83;
/// Letter `W`.
pub const KEY_W: i32 = 87;
/// Letter `Y`.
pub const KEY_Y: i32 = 89;
/// Letter `Z`.
pub const KEY_Z: i32 = 90;

/// Escape.
pub const KEY_ESCAPE: i32 = 256;
/// Enter / return.
pub const KEY_ENTER: i32 = 257;
/// Backspace.
pub const KEY_BACKSPACE: i32 = 259;
/// Forward delete.
pub const KEY_DELETE: i32 = 261;
/// Right arrow.
pub const KEY_RIGHT: i32 = 262;
/// Left arrow.
pub const KEY_LEFT: i32 = 263;
/// Down arrow.
pub const KEY_DOWN: i32 = 264;
/// Up arrow.
pub const KEY_UP: i32 = 265;
/// Page up.
pub const KEY_PAGE_UP: i32 = 266;
/// Page down.
pub const KEY_PAGE_DOWN: i32 = 267;

/// Keypad `-`.
pub const KEY_KP_SUBTRACT: i32 = 333;
/// Keypad `+`.
pub const KEY_KP_ADD: i32 = 334;

/// Left shift.
pub const KEY_LEFT_SHIFT: i32 = 340;
/// Left control.
pub const KEY_LEFT_CONTROL: i32 = 341;
/// Left alt.
pub const KEY_LEFT_ALT: i32 = 342;
/// Left super (logo).
pub const KEY_LEFT_SUPER: i32 = 343;
/// Right shift.
pub const KEY_RIGHT_SHIFT: i32 = 344;
/// Right control.
pub const KEY_RIGHT_CONTROL: i32 = 345;
/// Right alt.
pub const KEY_RIGHT_ALT: i32 = 346;
/// Right super (logo).
pub const KEY_RIGHT_SUPER: i32 = 347;
