// Copyright 2026 the Intake Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actions: the consumer-facing output of the pipeline.

use alloc::string::String;
use kurbo::{Point, Vec2};

use crate::Mods;

/// The discriminant of an [`Action`].
///
/// This is the complete contract surface between the input pipeline and the
/// host application. Some kinds are reserved for hosts and rule tables rather
/// than emitted by the built-in recognizer (for example `PanStart`), so the
/// vocabulary stays stable as deployments grow richer gesture sets.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ActionKind {
    /// A quick, small-motion press-and-release of the primary button.
    Click,
    /// A second click within the double-click window.
    DoubleClick,
    /// A drag session began.
    DragStart,
    /// Incremental drag motion; `delta` carries motion since the last emission.
    DragUpdate,
    /// A drag session ended.
    DragEnd,
    /// An orbit session began.
    OrbitStart,
    /// Incremental orbit motion.
    OrbitUpdate,
    /// An orbit session ended.
    OrbitEnd,
    /// A pan session began.
    PanStart,
    /// Incremental pan motion.
    PanUpdate,
    /// A pan session ended.
    PanEnd,
    /// Zoom by `delta.y`.
    Zoom,
    /// Select the object under the cursor.
    Select,
    /// Delete the current selection.
    Delete,
    /// Duplicate the current selection.
    Duplicate,
    /// Confirm the pending operation.
    Confirm,
    /// Cancel the pending operation.
    Cancel,
    /// The user asked the application to quit.
    Shutdown,
    /// A generic named key action; `val` carries a label the host interprets.
    Key,
    /// A quick press-and-release of the secondary button.
    RightClick,
    /// Passive pointer motion; `delta` carries motion since the last emission.
    MouseMove,
}

/// A discrete, semantically named action emitted by the pipeline.
///
/// Every action carries the full payload; fields irrelevant to a given kind
/// hold neutral defaults (`pos` at the origin for process-level actions,
/// `code` of `-1` for synthetic emissions, empty `mods`, zero `delta`, empty
/// `val`). [`Action::new`] produces the all-neutral record, and emitters fill
/// in what matters with struct update syntax:
///
/// ```rust
/// use intake_events::{Action, ActionKind};
/// use kurbo::Vec2;
///
/// let zoom = Action { delta: Vec2::new(0.0, 1.0), ..Action::new(ActionKind::Zoom) };
/// assert_eq!(zoom.code, -1);
/// assert_eq!(zoom.delta.y, 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    /// What happened.
    pub kind: ActionKind,
    /// Last known cursor position at emission.
    pub pos: Point,
    /// Button or key id; `-1` when the action is synthetic.
    pub code: i32,
    /// Modifier state at emission.
    pub mods: Mods,
    /// Motion or scroll delta; zero when irrelevant.
    pub delta: Vec2,
    /// Label for [`ActionKind::Key`] actions; empty otherwise.
    pub val: String,
}

impl Action {
    /// An action of the given kind with every payload field at its neutral
    /// default.
    pub const fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            pos: Point::ORIGIN,
            code: -1,
            mods: Mods::empty(),
            delta: Vec2::ZERO,
            val: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_defaults() {
        let a = Action::new(ActionKind::Shutdown);
        assert_eq!(a.pos, Point::ORIGIN);
        assert_eq!(a.code, -1);
        assert_eq!(a.mods, Mods::empty());
        assert_eq!(a.delta, Vec2::ZERO);
        assert!(a.val.is_empty());
    }

    #[test]
    fn update_syntax_preserves_unset_fields() {
        let a = Action { code: 0, ..Action::new(ActionKind::Click) };
        assert_eq!(a.kind, ActionKind::Click);
        assert_eq!(a.code, 0);
        assert_eq!(a.delta, Vec2::ZERO);
    }
}
