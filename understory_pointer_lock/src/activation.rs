// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The activation state machine.
//!
//! [`PointerLockMovement`] decides, from the pointer events the host delivers,
//! when to lock the pointer, feeds movement into a [`MotionState`] while locked,
//! and unwinds everything on release.
//!
//! ## Phases
//!
//! ```text
//!            down (drag offset)          move (distance >= offset)
//!   Idle  ───────────────────▶ Preparing ─────────────────────────▶ Locked
//!    ▲  ▲                         │                                   │
//!    │  └──── up (too short) ─────┘                                   │
//!    │                                                                │
//!    └─── up (drag) / down (toggle) / move without buttons (drag) ────┘
//!         / lock lost / teardown
//! ```
//!
//! Without a drag offset a primary press goes straight from `Idle` to `Locked`.
//! With [`Trigger::Toggle`](crate::options::Trigger::Toggle) each primary press
//! flips between `Idle` and `Locked`.
//!
//! Presses are ignored when:
//! - the changed button is not the primary one;
//! - `disable_on_active_element` is set and the press targets the focused element
//!   (checked on activation only, so a toggle press can always release);
//! - the host already reports the target as locked.
//!
//! ## Listeners
//!
//! The machine tells the host which events it wants through
//! [`Host::listen`]/[`Host::unlisten`], and ignores any event whose listener is
//! not registered. [`PointerLockMovement::teardown`] unregisters all of them.
//!
//! ## Lock confirmation
//!
//! Entering `Locked` only requests the lock. The machine does not wait for the
//! grant; when the host reports a lock change and the target no longer holds the
//! lock, the session ends.

use core::fmt;
use core::mem;

use kurbo::Point;

use crate::error::PointerLockError;
use crate::event::PointerEvent;
use crate::host::{CursorAdapter, CursorMarker, Host, Listeners, ScreenAdapter, ScreenArea};
use crate::logging::{debug, trace};
use crate::motion::{MotionState, MoveState};
use crate::observer::Observer;
use crate::options::{PointerLockOptions, Trigger};

/// Externally visible phase of a controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for a qualifying press.
    Idle,
    /// A drag is in progress but has not travelled far enough to lock.
    Preparing,
    /// The pointer is locked and movement is being tracked.
    Locked,
}

/// Why a locked session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReleaseCause {
    /// Pointer-up under drag, or a second press under toggle.
    Release,
    /// A move arrived with no buttons held under drag.
    ImplicitRelease,
    /// The host reported that the target lost the lock.
    LockLost,
    /// [`PointerLockMovement::teardown`] was called.
    Teardown,
}

/// Result of handling one input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transition {
    /// Nothing changed.
    Stay,
    /// Entered [`Phase::Preparing`].
    Prepared,
    /// Left [`Phase::Preparing`] without locking.
    PrepareCanceled,
    /// Entered [`Phase::Locked`].
    Locked,
    /// Advanced the locked session by one step.
    Moved(MoveState),
    /// Left [`Phase::Locked`].
    Unlocked(ReleaseCause),
}

struct Session<H: Host> {
    motion: MotionState,
    area: H::Area,
    marker: H::Marker,
}

enum State<H: Host> {
    Idle,
    Preparing { down: Point },
    Locked(Session<H>),
}

/// Options type accepted by a controller for host `H`.
pub type HostOptions<H> = PointerLockOptions<<H as ScreenAdapter>::ScreenSpec, <H as CursorAdapter>::CursorSpec>;

/// Pointer-lock movement controller bound to one target element.
///
/// Created by [`pointer_lock_movement`](crate::pointer_lock_movement). The host
/// forwards the events it was asked to listen for to the `on_*` methods, and
/// calls [`teardown`](Self::teardown) when done.
pub struct PointerLockMovement<H: Host, O> {
    target: H::Target,
    host: H,
    observer: O,
    options: HostOptions<H>,
    state: State<H>,
    listeners: Listeners,
}

impl<H, O> PointerLockMovement<H, O>
where
    H: Host,
    O: Observer<H::Target>,
{
    /// Start a controller on `target`.
    ///
    /// Fails with [`PointerLockError::Unsupported`] before registering anything
    /// if the host cannot lock the pointer.
    pub fn new(target: H::Target, host: H, options: HostOptions<H>, observer: O) -> Result<Self, PointerLockError> {
        if !host.is_supported() {
            return Err(PointerLockError::Unsupported);
        }
        let mut this = Self {
            target,
            host,
            observer,
            options,
            state: State::Idle,
            listeners: Listeners::empty(),
        };
        let base = match this.options.trigger {
            Trigger::Drag => Listeners::POINTER_DOWN | Listeners::POINTER_UP,
            Trigger::Toggle => Listeners::POINTER_DOWN,
        };
        this.listen(base);
        debug!(trigger = ?this.options.trigger, behavior = ?this.options.loop_behavior, "pointer lock controller started");
        Ok(this)
    }

    /// Handle a pointer press on the target.
    pub fn on_pointer_down(&mut self, event: PointerEvent<H::Target>) -> Transition {
        if !self.listeners.contains(Listeners::POINTER_DOWN) {
            return Transition::Stay;
        }
        if !event.is_primary() {
            trace!(button = ?event.button, "ignoring non-primary press");
            return Transition::Stay;
        }
        match (self.phase(), self.options.trigger) {
            (Phase::Locked, Trigger::Toggle) => self.deactivate(ReleaseCause::Release),
            (Phase::Idle, _) => {
                if self.is_suppressed(&event) {
                    trace!("ignoring press on the active element");
                    return Transition::Stay;
                }
                if self.host.is_locked(&self.target) {
                    trace!("ignoring press, target already holds the lock");
                    return Transition::Stay;
                }
                if self.options.drag_threshold().is_some() {
                    self.state = State::Preparing { down: event.position };
                    self.listen(Listeners::POINTER_MOVE);
                    debug!("preparing pointer lock");
                    self.observer.prepare_lock(&event);
                    Transition::Prepared
                } else {
                    self.activate(event)
                }
            }
            _ => Transition::Stay,
        }
    }

    /// Handle a pointer move anywhere in the document.
    pub fn on_pointer_move(&mut self, mut event: PointerEvent<H::Target>) -> Transition {
        if !self.listeners.contains(Listeners::POINTER_MOVE) {
            return Transition::Stay;
        }
        if self.phase() == Phase::Locked && self.options.trigger == Trigger::Drag && event.buttons.is_empty() {
            return self.deactivate(ReleaseCause::ImplicitRelease);
        }
        let down = match &mut self.state {
            State::Idle => return Transition::Stay,
            State::Preparing { down } => *down,
            State::Locked(session) => {
                let (motion, seen) = session.motion.advance(event.movement);
                session.motion = motion;
                trace!(x = seen.position.x, y = seen.position.y, status = ?seen.status, "pointer lock step");
                self.observer.moved(&mut event, &seen);
                if !event.default_prevented {
                    let origin = session.area.bounds().origin();
                    session.marker.set_position(origin + seen.position.to_vec2());
                }
                return Transition::Moved(seen);
            }
        };
        let Some(threshold) = self.options.drag_threshold() else {
            return Transition::Stay;
        };
        // Squared distances avoid a square root on every move.
        if (event.position - down).hypot2() < threshold * threshold {
            return Transition::Stay;
        }
        self.activate(event)
    }

    /// Handle a pointer release.
    pub fn on_pointer_up(&mut self, event: PointerEvent<H::Target>) -> Transition {
        if !self.listeners.contains(Listeners::POINTER_UP) {
            return Transition::Stay;
        }
        match self.phase() {
            Phase::Preparing => {
                self.state = State::Idle;
                self.unlisten(Listeners::POINTER_MOVE);
                debug!("pointer lock preparation canceled");
                self.observer.cancel_prepare_lock(&event);
                Transition::PrepareCanceled
            }
            Phase::Locked if self.options.trigger == Trigger::Drag => self.deactivate(ReleaseCause::Release),
            _ => Transition::Stay,
        }
    }

    /// Handle a pointer-lock change notification from the host.
    pub fn on_lock_change(&mut self) -> Transition {
        if !self.listeners.contains(Listeners::LOCK_CHANGE) {
            return Transition::Stay;
        }
        if self.phase() == Phase::Locked && !self.host.is_locked(&self.target) {
            self.deactivate(ReleaseCause::LockLost)
        } else {
            Transition::Stay
        }
    }

    /// Stop the controller.
    ///
    /// Ends any locked session, drops any pending drag, and unregisters every
    /// listener. Calling it again does nothing.
    pub fn teardown(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        match self.phase() {
            Phase::Locked => {
                self.deactivate(ReleaseCause::Teardown);
            }
            Phase::Preparing => self.state = State::Idle,
            Phase::Idle => {}
        }
        self.unlisten(self.listeners);
        debug!("pointer lock controller torn down");
    }

    fn is_suppressed(&self, event: &PointerEvent<H::Target>) -> bool {
        self.options.disable_on_active_element
            && self
                .host
                .active_element()
                .is_some_and(|active| active == event.target)
    }

    /// Enter `Locked` from `event`, which becomes the session's zero-offset first step.
    fn activate(&mut self, mut event: PointerEvent<H::Target>) -> Transition {
        let adapter_options = self.options.adapter_options();
        let area = self.host.resolve_screen(self.options.screen.as_ref(), adapter_options);
        let marker = self.host.resolve_cursor(self.options.cursor.as_ref(), adapter_options);
        let bounds = area.bounds();
        let origin = (event.position - bounds.origin()).to_point();
        let motion = MotionState::new(origin, bounds.size(), self.options.loop_behavior);
        let first = motion.observe();
        self.state = State::Locked(Session { motion, area, marker });
        self.listen(Listeners::POINTER_MOVE | Listeners::LOCK_CHANGE);
        self.host.request(&self.target);
        debug!(x = origin.x, y = origin.y, width = bounds.width(), height = bounds.height(), "pointer locked");
        self.observer.lock_changed(true);
        // The activation position is already the origin; its movement is not applied.
        self.observer.moved(&mut event, &first);
        if !event.default_prevented
            && let State::Locked(session) = &mut self.state
        {
            session.marker.set_position(event.position);
        }
        Transition::Locked
    }

    fn deactivate(&mut self, cause: ReleaseCause) -> Transition {
        let State::Locked(session) = mem::replace(&mut self.state, State::Idle) else {
            return Transition::Stay;
        };
        self.host.exit();
        self.unlisten(Listeners::POINTER_MOVE | Listeners::LOCK_CHANGE);
        debug!(?cause, "pointer unlocked");
        self.observer.lock_changed(false);
        session.marker.release();
        session.area.release();
        Transition::Unlocked(cause)
    }
}

impl<H: Host, O> PointerLockMovement<H, O> {
    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Preparing { .. } => Phase::Preparing,
            State::Locked(_) => Phase::Locked,
        }
    }

    /// Observation for the current locked session, if any.
    pub fn move_state(&self) -> Option<MoveState> {
        match &self.state {
            State::Locked(session) => Some(session.motion.observe()),
            _ => None,
        }
    }

    /// Motion state of the current locked session, if any.
    pub fn motion(&self) -> Option<&MotionState> {
        match &self.state {
            State::Locked(session) => Some(&session.motion),
            _ => None,
        }
    }

    /// Listeners currently registered with the host.
    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    /// Whether the controller is still running.
    pub fn is_active(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// The element this controller is bound to.
    pub fn target(&self) -> &H::Target {
        &self.target
    }

    /// The options this controller was started with.
    pub fn options(&self) -> &HostOptions<H> {
        &self.options
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    ///
    /// Changing lock state through this does not notify the controller; call
    /// [`on_lock_change`](Self::on_lock_change) afterwards.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn listen(&mut self, listeners: Listeners) {
        let added = listeners - self.listeners;
        if !added.is_empty() {
            self.listeners |= added;
            self.host.listen(added);
        }
    }

    fn unlisten(&mut self, listeners: Listeners) {
        let removed = listeners & self.listeners;
        if !removed.is_empty() {
            self.listeners -= removed;
            self.host.unlisten(removed);
        }
    }
}

impl<H: Host, O> fmt::Debug for PointerLockMovement<H, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerLockMovement")
            .field("phase", &self.phase())
            .field("listeners", &self.listeners)
            .field("motion", &self.motion())
            .field("trigger", &self.options.trigger)
            .field("loop_behavior", &self.options.loop_behavior)
            .finish_non_exhaustive()
    }
}
