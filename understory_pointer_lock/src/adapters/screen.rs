// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen adapter for explicit rectangles.
//!
//! A screen area drawn on the page is the host's own [`ScreenAdapter`]; see
//! the [module docs](super).

use kurbo::{Point, Rect, Size};

use crate::host::ScreenAdapter;
use crate::options::AdapterOptions;

/// Resolves screens from explicit rectangles.
///
/// An absent spec resolves to the viewport at the origin; a rectangle is
/// returned verbatim. Nothing is rendered, so releasing is a no-op.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportScreen {
    /// Current viewport size.
    pub viewport: Size,
}

impl ViewportScreen {
    /// Adapter for a viewport of the given size.
    pub fn new(viewport: Size) -> Self {
        Self { viewport }
    }

    /// Track a viewport resize.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }
}

impl ScreenAdapter for ViewportScreen {
    type ScreenSpec = Rect;
    type Area = Rect;

    fn resolve_screen(&mut self, spec: Option<&Rect>, _options: AdapterOptions) -> Rect {
        match spec {
            Some(rect) => *rect,
            None => Rect::from_origin_size(Point::ORIGIN, self.viewport),
        }
    }
}
