// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pointer_lock --heading-base-level=0

//! Understory Pointer Lock: a virtual cursor driven by locked-pointer movement.
//!
//! While the pointer is locked the host only reports relative movement. This
//! crate turns those deltas into a bounded, continuous virtual-cursor position
//! inside a configurable screen, and decides when to lock and unlock from the
//! stream of pointer presses, moves and releases on a target element.
//!
//! ## Overview
//!
//! - [`boundary`]: the edge policies ([`LoopBehavior`]): wrap around, stop at
//!   the edge, or keep going.
//! - [`motion`]: [`MotionState`](motion::MotionState), a pure step function that
//!   folds one delta into the running position and yields a
//!   [`MoveState`](motion::MoveState) observation.
//! - [`activation`]: [`PointerLockMovement`], the state machine that moves
//!   between idle, preparing (waiting for a drag to travel far enough) and
//!   locked, and drives the motion state while locked.
//! - [`host`]: the traits the embedding environment implements: the lock
//!   primitive, screen and cursor adapters, focus queries and listener
//!   registration. [`adapters`] has headless implementations of the adapters.
//! - [`observer`]: lifecycle and motion callbacks.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_pointer_lock::adapters::{NoCursor, ViewportScreen};
//! use understory_pointer_lock::host::{CursorAdapter, Host, Listeners, LockPrimitive, ScreenAdapter};
//! use understory_pointer_lock::options::AdapterOptions;
//! use understory_pointer_lock::{
//!     LoopBehavior, Phase, PointerEvent, PointerLockOptions, Transition, pointer_lock_movement,
//! };
//!
//! #[derive(Debug)]
//! struct Page {
//!     locked: Option<u32>,
//!     screen: ViewportScreen,
//! }
//!
//! impl LockPrimitive for Page {
//!     type Target = u32;
//!     fn is_supported(&self) -> bool { true }
//!     fn request(&mut self, target: &u32) { self.locked = Some(*target); }
//!     fn exit(&mut self) { self.locked = None; }
//!     fn is_locked(&self, target: &u32) -> bool { self.locked == Some(*target) }
//! }
//!
//! impl ScreenAdapter for Page {
//!     type ScreenSpec = Rect;
//!     type Area = Rect;
//!     fn resolve_screen(&mut self, spec: Option<&Rect>, options: AdapterOptions) -> Rect {
//!         self.screen.resolve_screen(spec, options)
//!     }
//! }
//!
//! impl CursorAdapter for Page {
//!     type CursorSpec = ();
//!     type Marker = ();
//!     fn resolve_cursor(&mut self, spec: Option<&()>, options: AdapterOptions) {
//!         NoCursor.resolve_cursor(spec, options)
//!     }
//! }
//!
//! impl Host for Page {
//!     fn active_element(&self) -> Option<u32> { None }
//!     fn listen(&mut self, _: Listeners) {}
//!     fn unlisten(&mut self, _: Listeners) {}
//! }
//!
//! let page = Page { locked: None, screen: ViewportScreen::new(Size::new(100.0, 100.0)) };
//! let options = PointerLockOptions::new().with_loop_behavior(LoopBehavior::Stop);
//! let mut controller = pointer_lock_movement(7, page, options, ()).unwrap();
//!
//! controller.on_pointer_down(PointerEvent::down(7, Point::new(50.0, 50.0)));
//! assert_eq!(controller.phase(), Phase::Locked);
//!
//! let step = controller.on_pointer_move(PointerEvent::dragged(7, Point::new(50.0, 50.0), Vec2::new(80.0, 0.0)));
//! let Transition::Moved(state) = step else { panic!("expected a step") };
//! assert_eq!(state.position, Point::new(100.0, 50.0));
//!
//! controller.on_pointer_up(PointerEvent::up(7, Point::new(50.0, 50.0)));
//! assert_eq!(controller.phase(), Phase::Idle);
//! controller.teardown();
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `tracing`: emit `debug`/`trace` events for phase transitions and motion steps.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod logging;

pub mod activation;
pub mod adapters;
pub mod boundary;
pub mod error;
pub mod event;
pub mod host;
pub mod motion;
pub mod observer;
pub mod options;

pub use activation::{Phase, PointerLockMovement, ReleaseCause, Transition};
pub use boundary::{LoopBehavior, MoveStatus};
pub use error::PointerLockError;
pub use event::{PointerButton, PointerButtons, PointerEvent};
pub use motion::MoveState;
pub use observer::{Callbacks, Observer};
pub use options::{PointerLockOptions, Trigger};

use activation::HostOptions;
use host::{Host, LockPrimitive};

/// Whether `host` can lock the pointer at all.
pub fn is_support_pointer_lock<L: LockPrimitive + ?Sized>(host: &L) -> bool {
    host.is_supported()
}

/// Start managing pointer-lock movement for `target`.
///
/// Registers the initial listeners with `host` and returns the running
/// controller; [`PointerLockMovement::teardown`] undoes everything. Fails with
/// [`PointerLockError::Unsupported`] before touching the host if it has no
/// pointer lock.
pub fn pointer_lock_movement<H, O>(
    target: H::Target,
    host: H,
    options: HostOptions<H>,
    observer: O,
) -> Result<PointerLockMovement<H, O>, PointerLockError>
where
    H: Host,
    O: Observer<H::Target>,
{
    PointerLockMovement::new(target, host, options, observer)
}
