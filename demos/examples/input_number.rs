// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag a number input's label to scrub its value.
//!
//! A short press only focuses the input; dragging more than a few pixels locks
//! the pointer and every horizontal pixel changes the value by one. The cursor
//! wraps around the viewport so the drag never runs out of room.
//!
//! Run with:
//! ```bash
//! cargo run -p understory_demos --example input_number
//! ```

mod scripted_host;

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use scripted_host::{ScriptedHost, init_logging};
use understory_pointer_lock::{Callbacks, PointerEvent, PointerLockOptions, pointer_lock_movement};

const LABEL: u32 = 1;

fn main() {
    init_logging();

    let value = Rc::new(Cell::new(255.0_f64));
    let start = Rc::new(Cell::new(255.0_f64));

    let callbacks = Callbacks::new()
        .on_lock({
            let (value, start) = (Rc::clone(&value), Rc::clone(&start));
            move |locked| {
                if locked {
                    start.set(value.get());
                } else {
                    println!("committed value {}", value.get());
                }
            }
        })
        .on_cancel_prepare_lock(|_| println!("click: focusing the input instead"))
        .on_move({
            let (value, start) = (Rc::clone(&value), Rc::clone(&start));
            move |_, state| {
                value.set(start.get() + state.offset.x.round());
                println!("value {} ({:?})", value.get(), state.status);
            }
        });

    let host = ScriptedHost::new(Size::new(320.0, 240.0));
    let options = PointerLockOptions::new().with_drag_offset(3.0);
    let Ok(mut controller) = pointer_lock_movement(LABEL, host, options, callbacks) else {
        eprintln!("pointer lock is not available");
        return;
    };

    let at = Point::new(300.0, 100.0);

    // A click on the label.
    controller.on_pointer_down(PointerEvent::down(LABEL, at));
    controller.on_pointer_up(PointerEvent::up(LABEL, at));

    // A scrub to the right, wrapping past the viewport edge.
    controller.on_pointer_down(PointerEvent::down(LABEL, at));
    controller.on_pointer_move(PointerEvent::dragged(LABEL, at + Vec2::new(4.0, 0.0), Vec2::new(4.0, 0.0)));
    for dx in [10.0, 10.0, 10.0, -5.0] {
        controller.on_pointer_move(PointerEvent::dragged(LABEL, at, Vec2::new(dx, 0.0)));
        println!("cursor at {:?}", controller.host().cursor_position());
    }
    controller.on_pointer_up(PointerEvent::up(LABEL, at));

    controller.teardown();
}
