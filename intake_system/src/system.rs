// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame input orchestration.

use log::{debug, trace};

use intake_events::{Action, ActionKind, InputEvent};
use intake_gesture::GestureRecognizer;
use intake_rules::RuleSet;

use crate::EventQueue;

/// Owns the event queue, the optional rule stage, and the gesture recognizer,
/// and exposes the single per-frame entry point [`update`](Self::update).
#[derive(Debug)]
pub struct InputSystem {
    queue: EventQueue,
    rules: Option<RuleSet>,
    recognizer: GestureRecognizer,
}

impl InputSystem {
    /// A system that feeds raw events straight to a default-threshold
    /// recognizer, with no rule stage.
    pub fn new() -> Self {
        Self {
            queue: EventQueue::new(),
            rules: None,
            recognizer: GestureRecognizer::default(),
        }
    }

    /// A system with a declarative rule stage in front of the recognizer.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules: Some(rules), ..Self::new() }
    }

    /// A system around a recognizer built with custom thresholds, with no
    /// rule stage.
    pub fn with_recognizer(recognizer: GestureRecognizer) -> Self {
        Self { recognizer, ..Self::new() }
    }

    /// A producer handle onto this system's queue, for the platform callback
    /// to keep.
    pub fn queue(&self) -> EventQueue {
        self.queue.clone()
    }

    /// Append an event at the tail of the queue.
    pub fn enqueue(&self, event: InputEvent) {
        self.queue.enqueue(event);
    }

    /// The recognizer, for state queries.
    pub const fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    /// Drain the queue and dispatch the resulting actions. Call exactly once
    /// per frame.
    ///
    /// Events are consumed head-to-tail in strict FIFO order until the queue
    /// is empty; each event's actions are dispatched synchronously, in
    /// emission order, before the next event is dequeued. Emptiness is
    /// re-evaluated after every event, so events enqueued by a dispatch
    /// handler (through a cloned queue handle) are processed within the same
    /// call. A handler that re-enqueues on every dispatch therefore keeps
    /// `update` from returning.
    ///
    /// After the queue empties, the recognizer's time hook runs once and its
    /// actions are dispatched; this is the extension point for gestures that
    /// fire without a new input event.
    pub fn update(&mut self, dt: f64, mut dispatch: impl FnMut(Action)) {
        let mut drained = 0_usize;
        let mut emitted = 0_usize;
        while let Some(event) = self.queue.pop() {
            drained += 1;
            let actions = match &self.rules {
                Some(rules) => {
                    let intents = rules.map(&event);
                    self.recognizer.process(&event, &intents)
                }
                None => self.recognizer.process(&event, &[]),
            };
            for action in actions {
                if action.kind == ActionKind::Shutdown {
                    debug!("shutdown requested");
                }
                emitted += 1;
                dispatch(action);
            }
        }
        for action in self.recognizer.tick(dt) {
            emitted += 1;
            dispatch(action);
        }
        trace!("update drained {drained} events into {emitted} actions");
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
