// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intake Gesture: the stateful core of the intake pipeline.
//!
//! ## Overview
//!
//! A [`GestureRecognizer`] deterministically classifies a raw pointer/keyboard
//! stream into the discrete [`Action`](intake_events::Action) vocabulary. It
//! disambiguates click vs. double-click vs. drag with wall-clock time and
//! pixel-distance thresholds, tracks a held-modifier orbit session, windows
//! right-clicks, forwards scroll as zoom, and synthesizes keyboard-driven
//! pan/zoom/command pulses.
//!
//! All timing comes from event timestamps — the recognizer never reads a clock
//! of its own — and every threshold is injected at construction via
//! [`Thresholds`], so the state machine is fully drivable with synthetic
//! scripts.
//!
//! ## Minimal example
//!
//! A quick, small-motion press-and-release is a click:
//!
//! ```rust
//! use intake_events::{ActionKind, InputEvent, Mods, WindowId, code};
//! use intake_gesture::GestureRecognizer;
//!
//! let mut recognizer = GestureRecognizer::default();
//! let window = WindowId(1);
//! let button = |t, pressed| InputEvent::ButtonChanged {
//!     window,
//!     t,
//!     button: code::MOUSE_LEFT,
//!     pressed,
//!     repeat: false,
//!     mods: Mods::empty(),
//! };
//!
//! assert!(recognizer.process(&button(1.0, true), &[]).is_empty());
//! let actions = recognizer.process(&button(1.1, false), &[]);
//! assert_eq!(actions.len(), 1);
//! assert_eq!(actions[0].kind, ActionKind::Click);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod recognizer;

pub use recognizer::{GestureRecognizer, Thresholds};
