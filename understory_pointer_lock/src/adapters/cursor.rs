// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor adapters that do not render.
//!
//! Text, caller-element and styled cursors need rendering and belong to the
//! host's own [`CursorAdapter`]; see the [module docs](super).

use alloc::rc::Rc;
use core::cell::Cell;

use kurbo::Point;

use crate::host::{CursorAdapter, CursorMarker};
use crate::options::AdapterOptions;

/// Cursor adapter that places nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoCursor;

impl CursorAdapter for NoCursor {
    type CursorSpec = ();
    type Marker = ();

    fn resolve_cursor(&mut self, _spec: Option<&()>, _options: AdapterOptions) {}
}

/// Cursor adapter that publishes the marker position through a shared cell.
///
/// Clones share the same cell, so the embedder keeps one clone and reads
/// [`SharedCursor::position`] while the controller owns the marker. The
/// position is `None` whenever no marker is live.
#[derive(Clone, Debug, Default)]
pub struct SharedCursor {
    position: Rc<Cell<Option<Point>>>,
}

impl SharedCursor {
    /// A cursor with no live marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last placed position of the live marker.
    pub fn position(&self) -> Option<Point> {
        self.position.get()
    }
}

impl CursorAdapter for SharedCursor {
    type CursorSpec = ();
    type Marker = SharedMarker;

    fn resolve_cursor(&mut self, _spec: Option<&()>, _options: AdapterOptions) -> SharedMarker {
        SharedMarker {
            position: Rc::clone(&self.position),
        }
    }
}

/// Marker handed out by [`SharedCursor`].
#[derive(Debug)]
pub struct SharedMarker {
    position: Rc<Cell<Option<Point>>>,
}

impl CursorMarker for SharedMarker {
    fn set_position(&mut self, position: Point) {
        self.position.set(Some(position));
    }

    fn release(self) {
        self.position.set(None);
    }
}
