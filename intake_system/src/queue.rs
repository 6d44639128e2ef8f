// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared-handle FIFO of raw input events.

use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::cell::RefCell;

use intake_events::InputEvent;

/// An ordered buffer of raw input events with shared-handle semantics.
///
/// `Clone` hands out another handle to the same underlying queue: the
/// platform callback keeps one and appends, the frame loop keeps another and
/// drains. Handles are `Rc`-based and therefore `!Send`, which makes the
/// pipeline's single-thread contract a compile-time fact.
///
/// No operation blocks, and [`enqueue`](Self::enqueue) never drops.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl EventQueue {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event at the tail.
    pub fn enqueue(&self, event: InputEvent) {
        self.events.borrow_mut().push_back(event);
    }

    /// Remove and return the head event, if any.
    pub fn pop(&self) -> Option<InputEvent> {
        self.events.borrow_mut().pop_front()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether no events are pending.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_events::WindowId;

    fn scroll(t: f64, dy: f64) -> InputEvent {
        InputEvent::Scrolled { window: WindowId(1), t, dx: 0.0, dy }
    }

    #[test]
    fn drains_in_fifo_order() {
        let queue = EventQueue::new();
        queue.enqueue(scroll(0.0, 1.0));
        queue.enqueue(scroll(0.1, 2.0));
        queue.enqueue(scroll(0.2, 3.0));
        assert_eq!(queue.len(), 3);

        let mut seen = alloc::vec::Vec::new();
        while let Some(event) = queue.pop() {
            seen.push(event.time());
        }
        assert_eq!(seen, [0.0, 0.1, 0.2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn clones_share_the_same_queue() {
        let consumer = EventQueue::new();
        let producer = consumer.clone();

        producer.enqueue(scroll(0.0, 1.0));
        assert_eq!(consumer.len(), 1);
        assert!(consumer.pop().is_some());
        assert!(producer.is_empty());
    }
}
