// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host shared by the demos.

#![allow(dead_code, reason = "each demo uses a different subset")]

use kurbo::{Point, Rect, Size};
use understory_pointer_lock::adapters::{SharedCursor, SharedMarker, ViewportScreen};
use understory_pointer_lock::host::{CursorAdapter, Host, Listeners, LockPrimitive, ScreenAdapter};
use understory_pointer_lock::options::AdapterOptions;

/// A page with a viewport, a focus, and a lock that is always granted.
#[derive(Debug)]
pub struct ScriptedHost {
    pub locked: Option<u32>,
    pub focused: Option<u32>,
    pub listeners: Listeners,
    pub screen: ViewportScreen,
    pub cursor: SharedCursor,
}

impl ScriptedHost {
    pub fn new(viewport: Size) -> Self {
        Self {
            locked: None,
            focused: None,
            listeners: Listeners::empty(),
            screen: ViewportScreen::new(viewport),
            cursor: SharedCursor::new(),
        }
    }

    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor.position()
    }
}

impl LockPrimitive for ScriptedHost {
    type Target = u32;

    fn is_supported(&self) -> bool {
        true
    }

    fn request(&mut self, target: &u32) {
        tracing::info!(element = *target, "lock granted");
        self.locked = Some(*target);
    }

    fn exit(&mut self) {
        tracing::info!("lock exited");
        self.locked = None;
    }

    fn is_locked(&self, target: &u32) -> bool {
        self.locked == Some(*target)
    }
}

impl ScreenAdapter for ScriptedHost {
    type ScreenSpec = Rect;
    type Area = Rect;

    fn resolve_screen(&mut self, spec: Option<&Rect>, options: AdapterOptions) -> Rect {
        self.screen.resolve_screen(spec, options)
    }
}

impl CursorAdapter for ScriptedHost {
    type CursorSpec = ();
    type Marker = SharedMarker;

    fn resolve_cursor(&mut self, spec: Option<&()>, options: AdapterOptions) -> SharedMarker {
        self.cursor.resolve_cursor(spec, options)
    }
}

impl Host for ScriptedHost {
    fn active_element(&self) -> Option<u32> {
        self.focused
    }

    fn listen(&mut self, listeners: Listeners) {
        self.listeners |= listeners;
    }

    fn unlisten(&mut self, listeners: Listeners) {
        self.listeners -= listeners;
    }
}

/// Install a log subscriber honoring `RUST_LOG`, defaulting to debug output.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
