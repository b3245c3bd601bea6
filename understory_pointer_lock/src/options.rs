// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.
//!
//! [`PointerLockOptions`] is built once and handed to
//! [`pointer_lock_movement`](crate::pointer_lock_movement); the controller never
//! mutates it afterwards. `S` and `C` are the screen and cursor descriptions
//! understood by the host's adapters, and are passed through untouched.

use crate::boundary::LoopBehavior;

/// Default stacking order handed to the screen and cursor adapters.
pub const DEFAULT_Z_INDEX: i32 = 99999;

/// How a session starts and ends.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Press to lock, release to unlock.
    #[default]
    Drag,
    /// Each press flips between locked and unlocked.
    Toggle,
}

/// Hints passed to the screen and cursor adapters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AdapterOptions {
    /// Stacking order for any rendered screen or cursor.
    pub z_index: i32,
}

/// Configuration for one controller.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerLockOptions<S = kurbo::Rect, C = ()> {
    /// Behavior at the edges of the virtual screen.
    pub loop_behavior: LoopBehavior,
    /// How sessions start and end.
    pub trigger: Trigger,
    /// Minimum pointer travel before a drag locks the pointer.
    ///
    /// Only consulted for [`Trigger::Drag`]. See [`Self::drag_threshold`].
    pub drag_offset: Option<f64>,
    /// Ignore presses on the element that already has focus.
    pub disable_on_active_element: bool,
    /// Stacking order hint for the adapters.
    pub z_index: i32,
    /// Screen description for the screen adapter.
    pub screen: Option<S>,
    /// Cursor description for the cursor adapter.
    pub cursor: Option<C>,
}

impl<S, C> Default for PointerLockOptions<S, C> {
    fn default() -> Self {
        Self {
            loop_behavior: LoopBehavior::Loop,
            trigger: Trigger::Drag,
            drag_offset: None,
            disable_on_active_element: false,
            z_index: DEFAULT_Z_INDEX,
            screen: None,
            cursor: None,
        }
    }
}

impl<S, C> PointerLockOptions<S, C> {
    /// Options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the boundary policy.
    #[must_use]
    pub fn with_loop_behavior(mut self, loop_behavior: LoopBehavior) -> Self {
        self.loop_behavior = loop_behavior;
        self
    }

    /// Set the trigger mode.
    #[must_use]
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the drag offset.
    #[must_use]
    pub fn with_drag_offset(mut self, drag_offset: f64) -> Self {
        self.drag_offset = Some(drag_offset);
        self
    }

    /// Enable or disable active-element suppression.
    #[must_use]
    pub fn with_disable_on_active_element(mut self, disable: bool) -> Self {
        self.disable_on_active_element = disable;
        self
    }

    /// Set the stacking order hint.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Set the screen description.
    #[must_use]
    pub fn with_screen(mut self, screen: S) -> Self {
        self.screen = Some(screen);
        self
    }

    /// Set the cursor description.
    #[must_use]
    pub fn with_cursor(mut self, cursor: C) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// The effective drag threshold.
    ///
    /// `Some` only for [`Trigger::Drag`] with a finite, positive offset; anything
    /// else locks on the press itself.
    pub fn drag_threshold(&self) -> Option<f64> {
        match (self.trigger, self.drag_offset) {
            (Trigger::Drag, Some(offset)) if offset.is_finite() && offset > 0.0 => Some(offset),
            _ => None,
        }
    }

    /// Hints for the adapters.
    pub fn adapter_options(&self) -> AdapterOptions {
        AdapterOptions {
            z_index: self.z_index,
        }
    }
}
