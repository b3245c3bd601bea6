// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle and motion callbacks.
//!
//! Implement [`Observer`] to hear about a controller's lifecycle. Every method has
//! a no-op default, so implementors override only what they need; `()` observes
//! nothing. [`Callbacks`] adapts boxed closures for callers that prefer them:
//!
//! ```
//! use understory_pointer_lock::observer::{Callbacks, Observer};
//!
//! let mut callbacks: Callbacks<u32> = Callbacks::new().on_lock(|locked| {
//!     assert!(locked);
//! });
//! callbacks.lock_changed(true);
//! ```
//!
//! Callbacks run synchronously inside the controller's event handlers.

use alloc::boxed::Box;
use core::fmt;

use crate::event::PointerEvent;
use crate::motion::MoveState;

/// Receives controller lifecycle notifications.
pub trait Observer<K> {
    /// The pointer was locked (`true`) or released (`false`).
    fn lock_changed(&mut self, locked: bool) {
        let _ = locked;
    }

    /// A press started a drag that may become a lock once it travels far enough.
    fn prepare_lock(&mut self, event: &PointerEvent<K>) {
        let _ = event;
    }

    /// A drag was released before it travelled far enough to lock.
    fn cancel_prepare_lock(&mut self, event: &PointerEvent<K>) {
        let _ = event;
    }

    /// The virtual cursor moved.
    ///
    /// Also called once with a zero offset right after the lock starts, for the
    /// event that started it.
    ///
    /// Calling [`PointerEvent::prevent_default`] skips the marker update for this
    /// step only.
    fn moved(&mut self, event: &mut PointerEvent<K>, state: &MoveState) {
        let _ = (event, state);
    }
}

impl<K> Observer<K> for () {}

type LockFn = Box<dyn FnMut(bool)>;
type EventFn<K> = Box<dyn FnMut(&PointerEvent<K>)>;
type MoveFn<K> = Box<dyn FnMut(&mut PointerEvent<K>, &MoveState)>;

/// [`Observer`] built from optional closures.
pub struct Callbacks<K> {
    on_lock: Option<LockFn>,
    on_prepare_lock: Option<EventFn<K>>,
    on_cancel_prepare_lock: Option<EventFn<K>>,
    on_move: Option<MoveFn<K>>,
}

impl<K> Callbacks<K> {
    /// No callbacks.
    pub fn new() -> Self {
        Self {
            on_lock: None,
            on_prepare_lock: None,
            on_cancel_prepare_lock: None,
            on_move: None,
        }
    }

    /// Called when the lock state changes.
    #[must_use]
    pub fn on_lock(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_lock = Some(Box::new(f));
        self
    }

    /// Called when a drag starts preparing a lock.
    #[must_use]
    pub fn on_prepare_lock(mut self, f: impl FnMut(&PointerEvent<K>) + 'static) -> Self {
        self.on_prepare_lock = Some(Box::new(f));
        self
    }

    /// Called when a prepared drag is released too early.
    #[must_use]
    pub fn on_cancel_prepare_lock(mut self, f: impl FnMut(&PointerEvent<K>) + 'static) -> Self {
        self.on_cancel_prepare_lock = Some(Box::new(f));
        self
    }

    /// Called for every motion step.
    #[must_use]
    pub fn on_move(mut self, f: impl FnMut(&mut PointerEvent<K>, &MoveState) + 'static) -> Self {
        self.on_move = Some(Box::new(f));
        self
    }
}

impl<K> Default for Callbacks<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Callbacks<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_lock", &self.on_lock.is_some())
            .field("on_prepare_lock", &self.on_prepare_lock.is_some())
            .field("on_cancel_prepare_lock", &self.on_cancel_prepare_lock.is_some())
            .field("on_move", &self.on_move.is_some())
            .finish()
    }
}

impl<K> Observer<K> for Callbacks<K> {
    fn lock_changed(&mut self, locked: bool) {
        if let Some(f) = &mut self.on_lock {
            f(locked);
        }
    }

    fn prepare_lock(&mut self, event: &PointerEvent<K>) {
        if let Some(f) = &mut self.on_prepare_lock {
            f(event);
        }
    }

    fn cancel_prepare_lock(&mut self, event: &PointerEvent<K>) {
        if let Some(f) = &mut self.on_cancel_prepare_lock {
            f(event);
        }
    }

    fn moved(&mut self, event: &mut PointerEvent<K>, state: &MoveState) {
        if let Some(f) = &mut self.on_move {
            f(event, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use kurbo::{Point, Vec2};

    use super::*;
    use crate::boundary::MoveStatus;

    #[test]
    fn unset_callbacks_are_no_ops() {
        let mut callbacks: Callbacks<u32> = Callbacks::new();
        callbacks.lock_changed(true);
        callbacks.prepare_lock(&PointerEvent::down(1, Point::ZERO));
    }

    #[test]
    fn move_callback_can_prevent_default() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let mut callbacks: Callbacks<u32> = Callbacks::new().on_move(move |event, _| {
            seen.set(seen.get() + 1);
            event.prevent_default();
        });
        let mut event = PointerEvent::dragged(1, Point::ZERO, Vec2::new(1.0, 0.0));
        let state = MoveState {
            status: MoveStatus::Moving,
            movement: Vec2::new(1.0, 0.0),
            offset: Vec2::new(1.0, 0.0),
            position: Point::new(1.0, 0.0),
        };
        callbacks.moved(&mut event, &state);
        assert_eq!(calls.get(), 1);
        assert!(event.default_prevented);
    }

    #[test]
    fn debug_reports_which_callbacks_are_set() {
        let callbacks: Callbacks<u32> = Callbacks::new().on_lock(|_| {});
        let text = alloc::format!("{callbacks:?}");
        assert!(text.contains("on_lock: true"), "{text}");
        assert!(text.contains("on_move: false"), "{text}");
    }
}
