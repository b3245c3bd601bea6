// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made screen and cursor adapters.
//!
//! These cover hosts that do not render anything of their own, such as
//! headless tests, games that draw the cursor themselves, or embedders that
//! read the cursor position back each frame. Hosts delegate their
//! [`ScreenAdapter`](crate::host::ScreenAdapter) and
//! [`CursorAdapter`](crate::host::CursorAdapter) implementations to them.
//!
//! They only accept `()` for the cursor and a [`Rect`](kurbo::Rect) for the
//! screen. Richer descriptions belong to the host's own adapters: a cursor
//! given as plain text, as an element the caller supplies, or as a style for a
//! generated element, and a screen area the host renders at the configured
//! z-index. Such a host picks its own `CursorSpec` and `ScreenSpec` types and
//! does the rendering in `resolve_*` and `release`:
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_pointer_lock::host::{CursorAdapter, CursorMarker, ScreenAdapter, ScreenArea};
//! use understory_pointer_lock::options::{AdapterOptions, DEFAULT_Z_INDEX};
//!
//! /// How the page draws its virtual cursor.
//! enum Cursor {
//!     Text(&'static str),
//!     Element(u32),
//!     Style(&'static str),
//! }
//!
//! struct Sprite {
//!     id: u32,
//!     z_index: i32,
//!     at: Point,
//! }
//!
//! impl CursorMarker for Sprite {
//!     fn set_position(&mut self, position: Point) { self.at = position; }
//!     fn release(self) {}
//! }
//!
//! struct Overlay(Rect);
//!
//! impl ScreenArea for Overlay {
//!     fn bounds(&self) -> Rect { self.0 }
//!     fn release(self) {}
//! }
//!
//! struct Page {
//!     next_id: u32,
//!     viewport: Rect,
//! }
//!
//! impl CursorAdapter for Page {
//!     type CursorSpec = Cursor;
//!     type Marker = Sprite;
//!     fn resolve_cursor(&mut self, spec: Option<&Cursor>, options: AdapterOptions) -> Sprite {
//!         let id = match spec {
//!             Some(Cursor::Element(id)) => *id,
//!             Some(Cursor::Text(_) | Cursor::Style(_)) | None => {
//!                 self.next_id += 1;
//!                 self.next_id
//!             }
//!         };
//!         Sprite { id, z_index: options.z_index, at: Point::ORIGIN }
//!     }
//! }
//!
//! impl ScreenAdapter for Page {
//!     type ScreenSpec = Rect;
//!     type Area = Overlay;
//!     fn resolve_screen(&mut self, spec: Option<&Rect>, _options: AdapterOptions) -> Overlay {
//!         Overlay(spec.copied().unwrap_or(self.viewport))
//!     }
//! }
//!
//! let mut page = Page { next_id: 100, viewport: Rect::new(0.0, 0.0, 640.0, 480.0) };
//! let options = AdapterOptions { z_index: DEFAULT_Z_INDEX };
//! let text = page.resolve_cursor(Some(&Cursor::Text("+")), options);
//! let own = page.resolve_cursor(Some(&Cursor::Element(7)), options);
//! let styled = page.resolve_cursor(Some(&Cursor::Style("color: red")), options);
//! assert_eq!((text.id, own.id, styled.id), (101, 7, 102));
//! assert_eq!(text.z_index, 99999);
//! assert_eq!(page.resolve_screen(None, options).bounds().width(), 640.0);
//! ```

pub mod cursor;
pub mod screen;

pub use cursor::{NoCursor, SharedCursor, SharedMarker};
pub use screen::ViewportScreen;
