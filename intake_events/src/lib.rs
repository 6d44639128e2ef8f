// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intake Events: the data vocabulary of the intake input pipeline.
//!
//! ## Overview
//!
//! The intake pipeline turns a stream of raw, timestamped input events into a
//! small set of discrete, semantically named actions a host application reacts
//! to once per frame. This crate defines the three representations that flow
//! through that pipeline, leaves first:
//!
//! - [`InputEvent`]: an immutable, timestamped record produced by the platform
//!   layer (pointer motion, button change, scroll, key change). Created once,
//!   consumed exactly once.
//! - [`Intent`]: an ephemeral, context-mapped reading of a raw event, produced
//!   by an optional declarative rule stage. Never persisted.
//! - [`Action`]: the final, consumer-facing unit — a [`kind`](Action::kind)
//!   discriminant plus a uniform payload in which unused fields hold neutral
//!   defaults.
//!
//! There is no behavior here: recognition lives in `intake_gesture`, rule
//! mapping in `intake_rules`, and queueing/orchestration in `intake_system`.
//!
//! ## Id space
//!
//! Button and key ids are plain `i32` values in a GLFW-compatible id space;
//! the [`code`] module names the ones the pipeline cares about. Platform
//! adapters (winit, SDL, a test script) translate their native codes into this
//! space once, at the edge. Modifier state travels as a [`Mods`] bitmask with
//! GLFW-compatible bit values.
//!
//! ## Minimal example
//!
//! ```rust
//! use intake_events::{Action, ActionKind, InputEvent, Mods, WindowId, code};
//!
//! // A platform layer reports a left-button press at t = 1.25 s.
//! let event = InputEvent::ButtonChanged {
//!     window: WindowId(1),
//!     t: 1.25,
//!     button: code::MOUSE_LEFT,
//!     pressed: true,
//!     repeat: false,
//!     mods: Mods::empty(),
//! };
//! assert_eq!(event.time(), 1.25);
//! assert_eq!(event.window(), WindowId(1));
//!
//! // Actions start from neutral defaults; emitters fill in what is relevant.
//! let action = Action::new(ActionKind::Zoom);
//! assert_eq!(action.code, -1);
//! assert!(action.val.is_empty());
//! assert_eq!(action.delta, kurbo::Vec2::ZERO);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod event;
mod intent;
mod mods;

pub mod code;

pub use action::{Action, ActionKind};
pub use event::{InputEvent, WindowId};
pub use intent::Intent;
pub use mods::Mods;
