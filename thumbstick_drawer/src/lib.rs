// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumbstick Drawer: rendering strategies for the thumbstick control.
//!
//! A drawer turns [`Control`](thumbstick_control::Control) state into
//! [`thumbstick_surface`] operations. Drawers are plain values behind one
//! capability trait ([`Drawer`]) and compose by aggregation — there is no
//! inheritance hierarchy, just a [`composite::CompositeDrawer`] holding an
//! ordered child list.
//!
//! ## Draw phases
//!
//! Every draw call walks the same phase ladder, tracked per drawer:
//!
//! 1. **configure** — runs exactly once, on the first draw (e.g. the
//!    initial bitmap upload);
//! 2. **prepare** — re-derives direction-dependent geometry (arc start
//!    angles, arrow paths), but only when the control's direction or
//!    direction type differs from the last draw;
//! 3. **on-changed** — rebuilds property-derived caches when the drawer's
//!    configuration reports a change, then clears the flag;
//! 4. **draw** — always emits the operations for the current frame.
//!
//! The split keeps expensive intermediate geometry (paths, bitmaps) alive
//! across frames while the control sits inside one direction band.
//!
//! ## Configuration policy
//!
//! Visual configuration never fails: out-of-range values (circle ratios,
//! stroke widths, sweep angles) clamp silently into their documented
//! ranges. Degrading a color or ratio is better than aborting a render
//! pass.
//!
//! ## Bounded drawers
//!
//! A drawer that occupies radius `r` of its own can be *bounded*: its
//! shape's center travel is limited to the control's outer radius minus
//! `r`, so the drawn shape never crosses the outer boundary.
//!
//! ```rust
//! use peniko::Color;
//! use thumbstick_control::{Control, DirectionType};
//! use thumbstick_drawer::{Drawer, circle::{CircleDrawer, CircleRadius}};
//! use thumbstick_geometry::Size;
//! use thumbstick_surface::trace::TraceSurface;
//!
//! let mut control = Control::new(4.0, DirectionType::Eight);
//! control.on_resize(Size::new(200, 200).unwrap());
//!
//! let mut drawer = CircleDrawer::new(Color::WHITE, CircleRadius::Ratio(0.5), true);
//! let mut surface = TraceSurface::new();
//! drawer.draw(&mut surface, &control);
//! assert_eq!(surface.draw_ops().count(), 1);
//! ```

#![no_std]

extern crate alloc;

pub mod arc;
pub mod arrow;
pub mod bitmap;
pub mod border;
pub mod circle;
pub mod circle_arc;
pub mod composite;

mod cycle;
mod properties;

pub use properties::{
    CIRCLE_RATIO_MAX, CIRCLE_RATIO_MIN, MIN_STROKE_WIDTH, SWEEP_MAX_DEGREES, SWEEP_MIN_DEGREES,
};

use core::any::Any;

use thumbstick_control::Control;
use thumbstick_surface::Surface;

/// A rendering strategy for the thumbstick control.
///
/// Implementations are mutable because they carry caches (direction-keyed
/// geometry, uploaded bitmaps) across draws. They own those caches
/// exclusively; [`Drawer::release`] must return any surface resources
/// before the drawer is discarded.
pub trait Drawer {
    /// Emit this frame's operations for the given control state.
    fn draw(&mut self, surface: &mut dyn Surface, control: &Control);

    /// Destroy any surface resources this drawer caches.
    ///
    /// The default is a no-op; drawers without surface-side caches need
    /// nothing here.
    fn release(&mut self, surface: &mut dyn Surface) {
        let _ = surface;
    }

    /// Downcast hook so composite before-draw hooks can reach a concrete
    /// drawer's configuration.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
