// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input as seen by the controller.
//!
//! Button numbering follows the DOM `PointerEvent` model: [`PointerButton`] is the
//! button whose state changed, [`PointerButtons`] is the set currently held.

use bitflags::bitflags;
use kurbo::{Point, Vec2};

/// A single pointer button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button, or a touch/pen contact.
    Primary,
    /// Usually the middle mouse button.
    Auxiliary,
    /// Usually the right mouse button.
    Secondary,
    /// The browser-back button.
    Back,
    /// The browser-forward button.
    Forward,
}

impl PointerButton {
    /// Map a DOM `button` index onto a button, if it names one.
    pub fn from_index(index: i16) -> Option<Self> {
        match index {
            0 => Some(Self::Primary),
            1 => Some(Self::Auxiliary),
            2 => Some(Self::Secondary),
            3 => Some(Self::Back),
            4 => Some(Self::Forward),
            _ => None,
        }
    }

    /// The [`PointerButtons`] bit for this button.
    pub fn mask(self) -> PointerButtons {
        match self {
            Self::Primary => PointerButtons::PRIMARY,
            Self::Auxiliary => PointerButtons::AUXILIARY,
            Self::Secondary => PointerButtons::SECONDARY,
            Self::Back => PointerButtons::BACK,
            Self::Forward => PointerButtons::FORWARD,
        }
    }
}

bitflags! {
    /// Set of pointer buttons currently held, using DOM `buttons` bit values.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Primary button.
        const PRIMARY = 1;
        /// Secondary button.
        const SECONDARY = 1 << 1;
        /// Auxiliary button.
        const AUXILIARY = 1 << 2;
        /// Back button.
        const BACK = 1 << 3;
        /// Forward button.
        const FORWARD = 1 << 4;
    }
}

/// A pointer event delivered by the host.
///
/// `K` identifies the element the event was dispatched to.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent<K> {
    /// Element the event targets.
    pub target: K,
    /// Pointer position in viewport coordinates.
    ///
    /// While the pointer is locked this stays at the lock position.
    pub position: Point,
    /// Relative movement since the previous event.
    pub movement: Vec2,
    /// Button whose state changed, if any.
    pub button: Option<PointerButton>,
    /// Buttons held after this event.
    pub buttons: PointerButtons,
    /// Set by [`PointerEvent::prevent_default`].
    pub default_prevented: bool,
}

impl<K> PointerEvent<K> {
    /// A primary-button press at `position`.
    pub fn down(target: K, position: Point) -> Self {
        Self {
            target,
            position,
            movement: Vec2::ZERO,
            button: Some(PointerButton::Primary),
            buttons: PointerButtons::PRIMARY,
            default_prevented: false,
        }
    }

    /// A primary-button release at `position`.
    pub fn up(target: K, position: Point) -> Self {
        Self {
            target,
            position,
            movement: Vec2::ZERO,
            button: Some(PointerButton::Primary),
            buttons: PointerButtons::empty(),
            default_prevented: false,
        }
    }

    /// A move with no buttons held.
    pub fn moved(target: K, position: Point, movement: Vec2) -> Self {
        Self {
            target,
            position,
            movement,
            button: None,
            buttons: PointerButtons::empty(),
            default_prevented: false,
        }
    }

    /// A move with the primary button held.
    pub fn dragged(target: K, position: Point, movement: Vec2) -> Self {
        Self {
            buttons: PointerButtons::PRIMARY,
            ..Self::moved(target, position, movement)
        }
    }

    /// Replace the changed button, keeping `buttons` in sync for presses.
    #[must_use]
    pub fn with_button(mut self, button: Option<PointerButton>) -> Self {
        if let (Some(old), Some(new)) = (self.button, button)
            && self.buttons.contains(old.mask())
        {
            self.buttons.remove(old.mask());
            self.buttons.insert(new.mask());
        }
        self.button = button;
        self
    }

    /// Replace the set of held buttons.
    #[must_use]
    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Whether the changed button is the primary one.
    pub fn is_primary(&self) -> bool {
        self.button == Some(PointerButton::Primary)
    }

    /// Mark the event as handled.
    ///
    /// From an `on_move` observer this skips the cursor marker update for the
    /// step; the motion state still advances.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_indices_map_to_buttons() {
        assert_eq!(PointerButton::from_index(0), Some(PointerButton::Primary));
        assert_eq!(PointerButton::from_index(2), Some(PointerButton::Secondary));
        assert_eq!(PointerButton::from_index(-1), None, "-1 means no button changed");
    }

    #[test]
    fn with_button_keeps_held_set_consistent() {
        let ev = PointerEvent::down(1_u32, Point::ZERO).with_button(Some(PointerButton::Secondary));
        assert!(!ev.is_primary());
        assert_eq!(ev.buttons, PointerButtons::SECONDARY);
    }

    #[test]
    fn dragged_holds_primary() {
        let ev = PointerEvent::dragged(1_u32, Point::ZERO, Vec2::new(1.0, 0.0));
        assert!(ev.buttons.contains(PointerButtons::PRIMARY));
        assert_eq!(ev.button, None);
        assert!(PointerEvent::moved(1_u32, Point::ZERO, Vec2::ZERO).buttons.is_empty());
    }
}
