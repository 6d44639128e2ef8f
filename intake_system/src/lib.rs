// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intake System: the event queue and per-frame orchestrator.
//!
//! ## Overview
//!
//! This crate ties the intake pipeline together. An [`EventQueue`] decouples
//! event capture from per-frame consumption: the platform callback appends
//! through one handle, and once per frame the host calls
//! [`InputSystem::update`], which drains the queue head-to-tail, runs each
//! event through the optional rule stage and the gesture recognizer, and
//! dispatches the resulting actions synchronously in emission order.
//!
//! ## Wiring modes
//!
//! Both pipeline shapes are first-class:
//!
//! - [`InputSystem::new`] feeds raw events straight to the recognizer.
//! - [`InputSystem::with_rules`] inserts a declarative
//!   [`RuleSet`](intake_rules::RuleSet) stage whose intents accompany each
//!   event into the recognizer.
//!
//! ## Concurrency contract
//!
//! Queue handles are reference-counted and `!Send`: producer and consumer
//! share one thread, with platform callbacks expected to run during the frame
//! loop's event-poll step. A host with a genuinely cross-thread producer owns
//! the adapter for that.
//!
//! ## Minimal example
//!
//! ```rust
//! use intake_events::{ActionKind, InputEvent, WindowId};
//! use intake_system::InputSystem;
//!
//! let mut system = InputSystem::new();
//! system.enqueue(InputEvent::Scrolled { window: WindowId(1), t: 0.0, dx: 0.0, dy: 1.0 });
//!
//! let mut kinds = Vec::new();
//! system.update(1.0 / 60.0, |action| kinds.push(action.kind));
//! assert_eq!(kinds, vec![ActionKind::Zoom]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;
mod system;

pub use queue::EventQueue;
pub use system::InputSystem;
