// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion accumulation for a locked session.
//!
//! [`MotionState`] holds the running virtual-cursor position of one session.
//! Each raw movement delta is folded in with [`MotionState::advance`], which
//! returns the next state together with a [`MoveState`] observation for
//! callers. The step is pure: one delta in, one state and one observation out,
//! with no buffering between calls.
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use understory_pointer_lock::boundary::{LoopBehavior, MoveStatus};
//! use understory_pointer_lock::motion::MotionState;
//!
//! let state = MotionState::new(Point::new(50.0, 0.0), Size::new(100.0, 100.0), LoopBehavior::Stop);
//! let (state, seen) = state.advance(Vec2::new(40.0, 0.0));
//! assert_eq!(seen.offset, Vec2::new(40.0, 0.0));
//! let (_, seen) = state.advance(Vec2::new(40.0, 0.0));
//! assert_eq!(seen.position, Point::new(100.0, 0.0));
//! assert_eq!(seen.status, MoveStatus::Stopped);
//! ```

use kurbo::{Point, Size, Vec2};

use crate::boundary::{self, LoopBehavior, MoveStatus};

/// Observation emitted for every motion step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveState {
    /// Status of this step.
    pub status: MoveStatus,
    /// The raw delta applied on this step.
    pub movement: Vec2,
    /// Cumulative offset from the session origin.
    pub offset: Vec2,
    /// Current position, relative to the screen origin.
    pub position: Point,
}

/// Running position of one locked session.
///
/// `origin`, `bounds` and `behavior` are fixed when the session starts; only
/// `position`, `movement` and `status` change from step to step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionState {
    position: Point,
    movement: Vec2,
    status: MoveStatus,
    origin: Point,
    bounds: Size,
    behavior: LoopBehavior,
}

impl MotionState {
    /// Start a session at `origin`, relative to the screen origin.
    pub fn new(origin: Point, bounds: Size, behavior: LoopBehavior) -> Self {
        Self {
            position: origin,
            movement: Vec2::ZERO,
            status: MoveStatus::Moving,
            origin,
            bounds,
            behavior,
        }
    }

    /// Fold one raw movement delta into the state.
    #[must_use]
    pub fn advance(self, movement: Vec2) -> (Self, MoveState) {
        let (position, status) = boundary::apply(self.position, movement, self.bounds, self.behavior);
        let next = Self {
            position,
            movement,
            status,
            ..self
        };
        (next, next.observe())
    }

    /// The observation for the current state.
    pub fn observe(&self) -> MoveState {
        MoveState {
            status: self.status,
            movement: self.movement,
            offset: self.position - self.origin,
            position: self.position,
        }
    }

    /// Current position, relative to the screen origin.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Position at session start.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Extent of the virtual screen.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Status of the last step.
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    /// Boundary policy used by this session.
    pub fn behavior(&self) -> LoopBehavior {
        self.behavior
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn run(state: MotionState, deltas: &[f64]) -> Vec<(f64, MoveStatus)> {
        let mut state = state;
        deltas
            .iter()
            .map(|dx| {
                let (next, seen) = state.advance(Vec2::new(*dx, 0.0));
                state = next;
                (seen.position.x, seen.status)
            })
            .collect()
    }

    #[test]
    fn stop_sequence_clamps_then_recovers() {
        let state = MotionState::new(Point::new(50.0, 10.0), Size::new(100.0, 100.0), LoopBehavior::Stop);
        let seen = run(state, &[40.0, 40.0, 40.0, -30.0]);
        assert_eq!(
            seen,
            [
                (90.0, MoveStatus::Moving),
                (100.0, MoveStatus::Stopped),
                (100.0, MoveStatus::Stopped),
                (70.0, MoveStatus::Moving),
            ]
        );
    }

    #[test]
    fn loop_wraps() {
        let state = MotionState::new(Point::new(90.0, 0.0), Size::new(100.0, 100.0), LoopBehavior::Loop);
        assert_eq!(run(state, &[20.0]), [(10.0, MoveStatus::Moving)]);
    }

    #[test]
    fn offset_is_relative_to_origin() {
        let state = MotionState::new(Point::new(20.0, 30.0), Size::new(100.0, 100.0), LoopBehavior::Infinite);
        let (state, _) = state.advance(Vec2::new(5.0, -5.0));
        let (state, seen) = state.advance(Vec2::new(-1.0, 2.0));
        assert_eq!(seen.movement, Vec2::new(-1.0, 2.0), "movement is the last raw delta");
        assert_eq!(seen.offset, Vec2::new(4.0, -3.0));
        assert_eq!(state.origin(), Point::new(20.0, 30.0), "origin never moves");
        assert_eq!(state.bounds(), Size::new(100.0, 100.0), "bounds never change");
    }

    #[test]
    fn fresh_state_observes_no_motion() {
        let state = MotionState::new(Point::new(1.0, 2.0), Size::new(10.0, 10.0), LoopBehavior::Loop);
        let seen = state.observe();
        assert_eq!(seen.offset, Vec2::ZERO);
        assert_eq!(seen.movement, Vec2::ZERO);
        assert_eq!(seen.status, MoveStatus::Moving);
    }
}
