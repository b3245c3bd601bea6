// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary policies for the virtual cursor.
//!
//! A [`LoopBehavior`] maps an unbounded accumulated position onto the coordinate
//! space of the virtual screen. Each axis is handled independently:
//!
//! - [`LoopBehavior::Loop`]: the position wraps around, staying in `[0, bound)`.
//! - [`LoopBehavior::Stop`]: the position is clamped to `[0, bound]` and the step
//!   reports [`MoveStatus::Stopped`] when a clamp happened.
//! - [`LoopBehavior::Infinite`]: the position is unconstrained.
//!
//! ```
//! use kurbo::{Point, Size, Vec2};
//! use understory_pointer_lock::boundary::{LoopBehavior, MoveStatus, apply};
//!
//! let bounds = Size::new(100.0, 100.0);
//! let (p, status) = apply(Point::new(90.0, 10.0), Vec2::new(20.0, 0.0), bounds, LoopBehavior::Loop);
//! assert_eq!(p, Point::new(10.0, 10.0));
//! assert_eq!(status, MoveStatus::Moving);
//!
//! let (p, status) = apply(Point::new(90.0, 10.0), Vec2::new(20.0, 0.0), bounds, LoopBehavior::Stop);
//! assert_eq!(p, Point::new(100.0, 10.0));
//! assert_eq!(status, MoveStatus::Stopped);
//! ```

use kurbo::{Point, Size, Vec2};

/// How the virtual cursor behaves when it reaches the edge of the screen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoopBehavior {
    /// Wrap around to the opposite edge.
    #[default]
    Loop,
    /// Stop at the edge.
    Stop,
    /// Keep going past the edge.
    Infinite,
}

/// Status of the most recent motion step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    /// The cursor moved freely.
    #[default]
    Moving,
    /// At least one axis was clamped to an edge on this step.
    ///
    /// Only reported under [`LoopBehavior::Stop`].
    Stopped,
}

/// Apply `delta` to a single-axis `position` within `[0, bound]`.
///
/// Returns the new position and whether the step was clamped.
/// A non-positive `bound` collapses the axis to `0` under the bounded policies.
pub fn apply_axis(position: f64, delta: f64, bound: f64, behavior: LoopBehavior) -> (f64, bool) {
    let next = position + delta;
    match behavior {
        LoopBehavior::Infinite => (next, false),
        LoopBehavior::Loop => {
            if bound <= 0.0 {
                return (0.0, false);
            }
            if (0.0..bound).contains(&next) {
                return (next, false);
            }
            let mut wrapped = next % bound;
            if wrapped < 0.0 {
                wrapped += bound;
            }
            // `-tiny + bound` can round up to `bound`.
            if wrapped >= bound {
                wrapped = 0.0;
            }
            (wrapped, false)
        }
        LoopBehavior::Stop => {
            let bound = bound.max(0.0);
            if next > bound {
                (bound, true)
            } else if next < 0.0 {
                (0.0, true)
            } else {
                (next, false)
            }
        }
    }
}

/// Apply `delta` to `position` on both axes.
///
/// The x axis is bounded by `bounds.width`, the y axis by `bounds.height`.
/// The returned status is [`MoveStatus::Stopped`] if either axis was clamped on
/// this step, and [`MoveStatus::Moving`] otherwise; it never carries over from
/// a previous step.
pub fn apply(position: Point, delta: Vec2, bounds: Size, behavior: LoopBehavior) -> (Point, MoveStatus) {
    let (x, stopped_x) = apply_axis(position.x, delta.x, bounds.width, behavior);
    let (y, stopped_y) = apply_axis(position.y, delta.y, bounds.height, behavior);
    let status = if stopped_x || stopped_y {
        MoveStatus::Stopped
    } else {
        MoveStatus::Moving
    };
    (Point::new(x, y), status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_wraps_past_the_far_edge() {
        let (x, stopped) = apply_axis(90.0, 20.0, 100.0, LoopBehavior::Loop);
        assert_eq!(x, 10.0, "90 + 20 wraps to 10");
        assert!(!stopped, "loop never stops");
    }

    #[test]
    fn loop_wraps_below_zero() {
        let (x, _) = apply_axis(5.0, -15.0, 100.0, LoopBehavior::Loop);
        assert_eq!(x, 90.0, "5 - 15 wraps to 90");
    }

    #[test]
    fn loop_landing_on_bound_wraps_to_zero() {
        let (x, _) = apply_axis(60.0, 40.0, 100.0, LoopBehavior::Loop);
        assert_eq!(x, 0.0, "the far edge is excluded");
    }

    #[test]
    fn loop_handles_deltas_larger_than_the_bound() {
        let (x, _) = apply_axis(10.0, 250.0, 100.0, LoopBehavior::Loop);
        assert_eq!(x, 60.0, "multiple wraps in one step");
        let (x, _) = apply_axis(10.0, -250.0, 100.0, LoopBehavior::Loop);
        assert_eq!(x, 60.0, "multiple wraps backwards in one step");
    }

    #[test]
    fn loop_with_empty_bound_collapses() {
        assert_eq!(apply_axis(0.0, 5.0, 0.0, LoopBehavior::Loop), (0.0, false));
    }

    #[test]
    fn stop_clamps_and_reports() {
        assert_eq!(apply_axis(90.0, 40.0, 100.0, LoopBehavior::Stop), (100.0, true));
        assert_eq!(apply_axis(10.0, -40.0, 100.0, LoopBehavior::Stop), (0.0, true));
        assert_eq!(apply_axis(10.0, 40.0, 100.0, LoopBehavior::Stop), (50.0, false));
    }

    #[test]
    fn stop_includes_the_far_edge() {
        assert_eq!(
            apply_axis(60.0, 40.0, 100.0, LoopBehavior::Stop),
            (100.0, false),
            "reaching the edge exactly is not a clamp"
        );
    }

    #[test]
    fn infinite_is_unbounded() {
        assert_eq!(apply_axis(90.0, 400.0, 100.0, LoopBehavior::Infinite), (490.0, false));
        assert_eq!(apply_axis(0.0, -5.0, 100.0, LoopBehavior::Infinite), (-5.0, false));
    }

    #[test]
    fn either_axis_stopping_stops_the_step() {
        let bounds = Size::new(100.0, 50.0);
        let (p, status) = apply(Point::new(50.0, 45.0), Vec2::new(1.0, 10.0), bounds, LoopBehavior::Stop);
        assert_eq!(p, Point::new(51.0, 50.0));
        assert_eq!(status, MoveStatus::Stopped);
    }

    #[test]
    fn stopped_does_not_persist() {
        let bounds = Size::new(100.0, 100.0);
        let (p, status) = apply(Point::new(100.0, 50.0), Vec2::new(10.0, 0.0), bounds, LoopBehavior::Stop);
        assert_eq!(status, MoveStatus::Stopped);
        let (p, status) = apply(p, Vec2::new(-10.0, 0.0), bounds, LoopBehavior::Stop);
        assert_eq!(p, Point::new(90.0, 50.0));
        assert_eq!(status, MoveStatus::Moving, "moving back inside clears the stop");
    }
}
