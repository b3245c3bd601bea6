// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan a magnifying glass over an image with a toggled pointer lock.
//!
//! The glass is confined to the image's rectangle and stops at its edges.
//! The first click locks, the second releases, and losing the lock (for
//! example by pressing escape) also releases.
//!
//! Run with:
//! ```bash
//! cargo run -p understory_demos --example magnifier
//! ```

mod scripted_host;

use kurbo::{Point, Rect, Size, Vec2};
use scripted_host::{ScriptedHost, init_logging};
use understory_pointer_lock::{
    LoopBehavior, MoveState, Observer, PointerEvent, PointerLockOptions, Transition, Trigger, pointer_lock_movement,
};

const IMAGE: u32 = 7;

#[derive(Debug, Default)]
struct Glass {
    focus: Option<Point>,
}

impl Observer<u32> for Glass {
    fn lock_changed(&mut self, locked: bool) {
        println!("magnifier {}", if locked { "on" } else { "off" });
        if !locked {
            self.focus = None;
        }
    }

    fn moved(&mut self, _event: &mut PointerEvent<u32>, state: &MoveState) {
        self.focus = Some(state.position);
        println!("magnifying {:?} ({:?})", state.position, state.status);
    }
}

fn main() {
    init_logging();

    let image = Rect::new(40.0, 30.0, 240.0, 180.0);
    let options = PointerLockOptions::new()
        .with_trigger(Trigger::Toggle)
        .with_loop_behavior(LoopBehavior::Stop)
        .with_screen(image);
    let host = ScriptedHost::new(Size::new(640.0, 480.0));
    let Ok(mut controller) = pointer_lock_movement(IMAGE, host, options, Glass::default()) else {
        eprintln!("pointer lock is not available");
        return;
    };

    let click = Point::new(140.0, 105.0);
    controller.on_pointer_down(PointerEvent::down(IMAGE, click));
    for delta in [Vec2::new(60.0, 0.0), Vec2::new(60.0, 20.0), Vec2::new(-30.0, -10.0)] {
        if let Transition::Moved(state) = controller.on_pointer_move(PointerEvent::moved(IMAGE, click, delta)) {
            println!("offset from the click {:?}", state.offset);
        }
    }
    println!("glass focus {:?}", controller.observer().focus);

    // Escape: the host drops the lock on its own.
    controller.host_mut().locked = None;
    controller.on_lock_change();
    println!("after escape: {:?}", controller.phase());

    controller.teardown();
}
