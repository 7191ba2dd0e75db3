// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumbstick Surface: backend-agnostic drawing surface IR and traits.
//!
//! This crate defines the small, plain-old-data (POD) drawing vocabulary the
//! thumbstick drawer pipeline speaks, and the traits a host backend
//! implements to consume it. It deliberately covers only what an on-screen
//! analog stick needs: circles, arcs, paths, and bitmaps.
//!
//! # Position in the stack
//!
//! - **Drawers** (`thumbstick_drawer`) translate control state into
//!   sequences of [`StateOp`] and [`DrawOp`].
//! - **This crate** carries those operations as data.
//! - **Backends** (a platform canvas, a rasterizer, or the recording
//!   [`trace::TraceSurface`]) implement [`Surface`] and turn the
//!   operations into pixels.
//!
//! # Core concepts
//!
//! - **Resources**: bitmaps are opaque handles ([`BitmapId`]) created and
//!   destroyed through [`SurfaceResources`]. A drawer that caches a bitmap
//!   owns its handle exclusively and must destroy it before replacing it.
//! - **Operations**: [`StateOp`] mutates the current paint/stroke state,
//!   [`DrawOp`] produces pixels under that state.
//! - **Coordinates**: operations carry `f32` (the host boundary is f32);
//!   anything that needs precise math converts to [`kurbo`] f64 types.
//!
//! Paints are [`peniko::Brush`] values, so backends can map them directly
//! onto their native representation.
//!
//! # Example
//!
//! ```rust
//! use thumbstick_surface::{DrawOp, Surface, SurfaceExt, trace::TraceSurface};
//! use peniko::Color;
//!
//! let mut surface = TraceSurface::new();
//! surface.set_paint(Color::WHITE);
//! surface.draw(DrawOp::FillCircle { cx: 50.0, cy: 50.0, radius: 20.0 });
//! assert_eq!(surface.ops().len(), 2);
//! ```

#![no_std]

extern crate alloc;

pub mod trace;

use peniko::Brush;

/// Stroke style used by [`StateOp::SetStroke`].
///
/// A re-export of [`kurbo::Stroke`], which captures width, joins, caps,
/// dashes, and related stroke parameters.
pub type StrokeStyle = kurbo::Stroke;

/// Identifier for a bitmap resource.
///
/// A small, opaque handle that is stable for the lifetime of the resource.
/// Bitmaps are typically uploaded once and reused across frames until
/// explicitly destroyed.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitmapId(pub u32);

/// Description of a bitmap resource.
///
/// Pixel data is tightly packed, row-major, premultiplied RGBA8.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitmapDesc {
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
}

/// A simple axis-aligned rectangle in f32 coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectF {
    /// Minimum X coordinate.
    pub x0: f32,
    /// Minimum Y coordinate.
    pub y0: f32,
    /// Maximum X coordinate.
    pub x1: f32,
    /// Maximum Y coordinate.
    pub y1: f32,
}

impl RectF {
    /// Create a new rectangle from min/max corners.
    #[inline]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a rectangle of the given extent centered on a point.
    #[inline]
    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self::new(cx - hw, cy - hh, cx + hw, cy + hh)
    }

    /// Rectangle width.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Rectangle height.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Convert to kurbo's rectangle type.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

/// State operations that mutate the current drawing state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current paint brush.
    SetPaint(Brush),
    /// Set the current stroke style.
    SetStroke(StrokeStyle),
}

/// Draw operations that produce pixels given the current state.
///
/// Angles are in degrees, measured clockwise from positive X (screen
/// convention, Y grows downward).
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill a circle with the current paint.
    FillCircle {
        /// Center X coordinate.
        cx: f32,
        /// Center Y coordinate.
        cy: f32,
        /// Circle radius.
        radius: f32,
    },
    /// Stroke a circle outline with the current stroke and paint.
    StrokeCircle {
        /// Center X coordinate.
        cx: f32,
        /// Center Y coordinate.
        cy: f32,
        /// Circle radius.
        radius: f32,
    },
    /// Stroke a circular arc with the current stroke and paint.
    StrokeArc {
        /// Arc center X coordinate.
        cx: f32,
        /// Arc center Y coordinate.
        cy: f32,
        /// Arc radius.
        radius: f32,
        /// Start angle in degrees.
        start: f32,
        /// Sweep in degrees, clockwise from `start`.
        sweep: f32,
    },
    /// Fill the given path with the current paint.
    FillPath(kurbo::BezPath),
    /// Draw a bitmap mapped to a destination rect in local coordinates.
    DrawBitmap {
        /// Bitmap resource to draw.
        bitmap: BitmapId,
        /// Destination rectangle.
        dst: RectF,
    },
}

/// Unified surface operation, used by recordings and traces.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Bitmap resource lifetime interface.
///
/// Backends implement this to manage their own bitmap storage. IDs must
/// remain valid and refer to the same logical bitmap until
/// [`SurfaceResources::destroy_bitmap`] is called; destroying an id that is
/// not live is a no-op.
pub trait SurfaceResources {
    /// Upload a bitmap resource from raw pixels.
    ///
    /// `pixels` contains tightly packed, row-major, premultiplied RGBA8
    /// data of exactly `desc.width * desc.height * 4` bytes.
    fn create_bitmap(&mut self, desc: BitmapDesc, pixels: &[u8]) -> BitmapId;

    /// Destroy a previously created bitmap.
    fn destroy_bitmap(&mut self, id: BitmapId);
}

/// Minimal drawing surface trait.
///
/// A surface accepts state and draw operations in issue order. There is no
/// layer or transform stack here; the control draws in the host widget's
/// local coordinates.
pub trait Surface: SurfaceResources {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}

/// Convenience helpers for [`Surface`] implementations and callers.
///
/// Separate from [`Surface`] so that methods can take `impl Into` arguments
/// without complicating trait object usage (`&mut dyn Surface`).
pub trait SurfaceExt: Surface {
    /// Set the current paint from anything brush-convertible (e.g. a
    /// [`peniko::Color`]).
    #[inline]
    fn set_paint(&mut self, brush: impl Into<Brush>) {
        self.state(StateOp::SetPaint(brush.into()));
    }

    /// Set a plain stroke of the given width.
    #[inline]
    fn set_stroke_width(&mut self, width: f64) {
        self.state(StateOp::SetStroke(StrokeStyle::new(width)));
    }

    /// Fill a circle with the current paint.
    #[inline]
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.draw(DrawOp::FillCircle { cx, cy, radius });
    }

    /// Stroke a circle outline with the current stroke and paint.
    #[inline]
    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.draw(DrawOp::StrokeCircle { cx, cy, radius });
    }

    /// Stroke an arc with the current stroke and paint.
    #[inline]
    fn stroke_arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, sweep: f32) {
        self.draw(DrawOp::StrokeArc {
            cx,
            cy,
            radius,
            start,
            sweep,
        });
    }

    /// Draw a bitmap into a destination rectangle.
    #[inline]
    fn draw_bitmap(&mut self, bitmap: BitmapId, dst: RectF) {
        self.draw(DrawOp::DrawBitmap { bitmap, dst });
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}
