// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end sessions through the public entry points.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size, Vec2};
use understory_pointer_lock::adapters::{SharedCursor, SharedMarker, ViewportScreen};
use understory_pointer_lock::host::{CursorAdapter, Host, Listeners, LockPrimitive, ScreenAdapter};
use understory_pointer_lock::options::AdapterOptions;
use understory_pointer_lock::{
    Callbacks, LoopBehavior, MoveStatus, Phase, PointerEvent, PointerLockError, PointerLockOptions, Transition,
    Trigger, is_support_pointer_lock, pointer_lock_movement,
};

#[derive(Debug)]
struct Page {
    supported: bool,
    locked: Option<&'static str>,
    listeners: Listeners,
    screen: ViewportScreen,
    cursor: SharedCursor,
}

impl Page {
    fn new(width: f64, height: f64) -> Self {
        Self {
            supported: true,
            locked: None,
            listeners: Listeners::empty(),
            screen: ViewportScreen::new(Size::new(width, height)),
            cursor: SharedCursor::new(),
        }
    }
}

impl LockPrimitive for Page {
    type Target = &'static str;

    fn is_supported(&self) -> bool {
        self.supported
    }

    fn request(&mut self, target: &&'static str) {
        self.locked = Some(*target);
    }

    fn exit(&mut self) {
        self.locked = None;
    }

    fn is_locked(&self, target: &&'static str) -> bool {
        self.locked == Some(*target)
    }
}

impl ScreenAdapter for Page {
    type ScreenSpec = Rect;
    type Area = Rect;

    fn resolve_screen(&mut self, spec: Option<&Rect>, options: AdapterOptions) -> Rect {
        self.screen.resolve_screen(spec, options)
    }
}

impl CursorAdapter for Page {
    type CursorSpec = ();
    type Marker = SharedMarker;

    fn resolve_cursor(&mut self, spec: Option<&()>, options: AdapterOptions) -> SharedMarker {
        self.cursor.resolve_cursor(spec, options)
    }
}

impl Host for Page {
    fn active_element(&self) -> Option<&'static str> {
        None
    }

    fn listen(&mut self, listeners: Listeners) {
        self.listeners |= listeners;
    }

    fn unlisten(&mut self, listeners: Listeners) {
        self.listeners -= listeners;
    }
}

const LABEL: &str = "label";

fn nudge(dx: f64) -> PointerEvent<&'static str> {
    PointerEvent::dragged(LABEL, Point::new(50.0, 50.0), Vec2::new(dx, 0.0))
}

#[test]
fn capability_error_is_reported() {
    let mut page = Page::new(100.0, 100.0);
    page.supported = false;
    assert!(!is_support_pointer_lock(&page));
    let err = pointer_lock_movement(LABEL, page, PointerLockOptions::new(), ()).unwrap_err();
    assert_eq!(err, PointerLockError::Unsupported);
    assert_eq!(err.to_string(), "pointer lock is not supported by the host");
}

#[test]
fn stop_scenario() {
    let page = Page::new(100.0, 100.0);
    let options = PointerLockOptions::new().with_loop_behavior(LoopBehavior::Stop);
    let mut c = pointer_lock_movement(LABEL, page, options, ()).unwrap();
    c.on_pointer_down(PointerEvent::down(LABEL, Point::new(50.0, 50.0)));

    let mut seen = Vec::new();
    for dx in [40.0, 40.0, 40.0, -30.0] {
        let Transition::Moved(state) = c.on_pointer_move(nudge(dx)) else {
            panic!("expected a motion step");
        };
        seen.push((state.position.x, state.status));
    }
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
fn loop_scenario() {
    let page = Page::new(100.0, 100.0);
    let mut c = pointer_lock_movement(LABEL, page, PointerLockOptions::new(), ()).unwrap();
    c.on_pointer_down(PointerEvent::down(LABEL, Point::new(90.0, 50.0)));
    let Transition::Moved(state) = c.on_pointer_move(nudge(20.0)) else {
        panic!("expected a motion step");
    };
    assert_eq!(state.position.x, 10.0);
    assert_eq!(state.status, MoveStatus::Moving);
    assert_eq!(state.offset.x, -80.0, "offset follows the wrapped position");
    assert_eq!(c.host().cursor.position(), Some(Point::new(10.0, 50.0)));
}

#[test]
fn callbacks_see_the_whole_lifecycle() {
    #[derive(Debug, PartialEq)]
    enum Seen {
        Lock(bool),
        Prepare,
        Cancel,
        Move(f64),
    }

    let log = Rc::new(RefCell::new(Vec::new()));
    let (a, b, c2, d) = (Rc::clone(&log), Rc::clone(&log), Rc::clone(&log), Rc::clone(&log));
    let callbacks = Callbacks::new()
        .on_lock(move |locked| a.borrow_mut().push(Seen::Lock(locked)))
        .on_prepare_lock(move |_| b.borrow_mut().push(Seen::Prepare))
        .on_cancel_prepare_lock(move |_| c2.borrow_mut().push(Seen::Cancel))
        .on_move(move |_, state| d.borrow_mut().push(Seen::Move(state.offset.x)));

    let page = Page::new(200.0, 200.0);
    let options = PointerLockOptions::new()
        .with_drag_offset(4.0)
        .with_loop_behavior(LoopBehavior::Infinite);
    let mut c = pointer_lock_movement(LABEL, page, options, callbacks).unwrap();

    // A click: too short to lock.
    c.on_pointer_down(PointerEvent::down(LABEL, Point::new(10.0, 10.0)));
    c.on_pointer_move(PointerEvent::dragged(LABEL, Point::new(11.0, 10.0), Vec2::new(1.0, 0.0)));
    c.on_pointer_up(PointerEvent::up(LABEL, Point::new(11.0, 10.0)));

    // A real drag.
    c.on_pointer_down(PointerEvent::down(LABEL, Point::new(10.0, 10.0)));
    c.on_pointer_move(PointerEvent::dragged(LABEL, Point::new(14.0, 10.0), Vec2::new(4.0, 0.0)));
    assert_eq!(c.phase(), Phase::Locked);
    c.on_pointer_move(PointerEvent::dragged(LABEL, Point::new(14.0, 10.0), Vec2::new(7.0, 0.0)));
    c.on_pointer_move(PointerEvent::dragged(LABEL, Point::new(14.0, 10.0), Vec2::new(-2.0, 0.0)));
    c.on_pointer_up(PointerEvent::up(LABEL, Point::new(14.0, 10.0)));
    c.teardown();
    c.teardown();

    assert_eq!(
        *log.borrow(),
        [
            Seen::Prepare,
            Seen::Cancel,
            Seen::Prepare,
            Seen::Lock(true),
            Seen::Move(0.0),
            Seen::Move(7.0),
            Seen::Move(5.0),
            Seen::Lock(false),
        ]
    );
    assert!(c.host().listeners.is_empty());
    assert_eq!(c.host().locked, None);
}

#[test]
fn escape_during_toggle_session() {
    let page = Page::new(100.0, 100.0);
    let options = PointerLockOptions::new().with_trigger(Trigger::Toggle);
    let mut c = pointer_lock_movement(LABEL, page, options, ()).unwrap();
    c.on_pointer_down(PointerEvent::down(LABEL, Point::new(5.0, 5.0)));
    assert_eq!(c.phase(), Phase::Locked);

    // The user pressed escape: the host drops the lock and notifies.
    c.host_mut().locked = None;
    c.on_lock_change();
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.host().cursor.position(), None);

    // The next press starts a fresh session.
    c.on_pointer_down(PointerEvent::down(LABEL, Point::new(20.0, 30.0)));
    assert_eq!(c.move_state().map(|s| s.offset), Some(Vec2::ZERO));
    assert_eq!(c.motion().map(|m| m.origin()), Some(Point::new(20.0, 30.0)));
}
