// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contracts the host environment provides to the controller.
//!
//! The controller owns no platform code. Everything it needs from the outside
//! world comes through these traits:
//!
//! - [`LockPrimitive`]: request, exit and query the pointer lock.
//! - [`ScreenAdapter`]: resolve the virtual screen's bounding box.
//! - [`CursorAdapter`]: resolve a marker for the virtual cursor.
//! - [`Host`]: the combination of the above plus focus queries and listener
//!   registration.
//!
//! Vendor-specific lock APIs belong behind a single [`LockPrimitive`]
//! implementation chosen when the host is built.

use bitflags::bitflags;
use kurbo::{Point, Rect};

use crate::options::AdapterOptions;

/// Host pointer-lock facility.
pub trait LockPrimitive {
    /// Element identifier used by this host.
    type Target: Clone + PartialEq;

    /// Whether pointer locking is available at all.
    fn is_supported(&self) -> bool;

    /// Ask for the pointer to be locked to `target`.
    ///
    /// The grant may arrive later, or never; the host reports changes through
    /// [`PointerLockMovement::on_lock_change`](crate::activation::PointerLockMovement::on_lock_change).
    fn request(&mut self, target: &Self::Target);

    /// Release any pointer lock.
    fn exit(&mut self);

    /// Whether `target` currently holds the lock.
    fn is_locked(&self, target: &Self::Target) -> bool;
}

/// A resolved virtual screen.
pub trait ScreenArea {
    /// Bounding box in viewport coordinates.
    fn bounds(&self) -> Rect;

    /// Remove anything rendered for this area.
    fn release(self);
}

/// Resolves virtual screens.
pub trait ScreenAdapter {
    /// Caller-supplied screen description.
    type ScreenSpec;
    /// Resolved screen handle.
    type Area: ScreenArea;

    /// Resolve `spec` into a screen.
    ///
    /// An absent spec resolves to the viewport at the origin.
    fn resolve_screen(&mut self, spec: Option<&Self::ScreenSpec>, options: AdapterOptions) -> Self::Area;
}

/// A placed virtual cursor.
pub trait CursorMarker {
    /// Move the marker to `position`, in viewport coordinates.
    fn set_position(&mut self, position: Point);

    /// Remove the marker.
    fn release(self);
}

/// Resolves virtual cursor markers.
pub trait CursorAdapter {
    /// Caller-supplied cursor description.
    type CursorSpec;
    /// Resolved marker handle.
    type Marker: CursorMarker;

    /// Resolve `spec` into a marker.
    fn resolve_cursor(&mut self, spec: Option<&Self::CursorSpec>, options: AdapterOptions) -> Self::Marker;
}

bitflags! {
    /// Input subscriptions the controller asks the host for.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Pointer presses on the target.
        const POINTER_DOWN = 1;
        /// Pointer releases.
        const POINTER_UP = 1 << 1;
        /// Pointer moves anywhere in the document.
        const POINTER_MOVE = 1 << 2;
        /// Pointer-lock state changes.
        const LOCK_CHANGE = 1 << 3;
    }
}

/// Everything the controller needs from its environment.
pub trait Host: LockPrimitive + ScreenAdapter + CursorAdapter {
    /// The element that currently has focus, if any.
    fn active_element(&self) -> Option<Self::Target>;

    /// Start delivering the given events to the controller.
    fn listen(&mut self, listeners: Listeners);

    /// Stop delivering the given events to the controller.
    fn unlisten(&mut self, listeners: Listeners);
}

impl ScreenArea for Rect {
    fn bounds(&self) -> Rect {
        *self
    }

    fn release(self) {}
}

impl CursorMarker for () {
    fn set_position(&mut self, _position: Point) {}

    fn release(self) {}
}
