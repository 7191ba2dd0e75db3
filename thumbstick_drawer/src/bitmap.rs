// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bitmap knob drawer.

use core::any::Any;

use alloc::vec::Vec;

use thumbstick_control::Control;
use thumbstick_surface::{BitmapDesc, BitmapId, RectF, Surface, SurfaceExt};

use crate::Drawer;
use crate::cycle::DrawCycle;

/// Draws an uploaded bitmap centered on the control's position.
///
/// The bitmap is uploaded once, on the first draw, and reused across
/// frames. Assigning a new image destroys the old surface resource before
/// uploading the replacement, so the drawer never holds more than one live
/// bitmap. [`Drawer::release`] must be called before discarding the drawer
/// or its last upload leaks on the surface.
///
/// The bitmap occupies half its larger dimension of radius, and its center
/// travel is bounded so the image stays inside the control's outer
/// boundary.
///
/// Not `Clone`: the drawer owns its upload exclusively, and a clone would
/// alias the same [`BitmapId`].
#[derive(Debug)]
pub struct BitmapDrawer {
    desc: BitmapDesc,
    pixels: Vec<u8>,
    changed: bool,
    cycle: DrawCycle,
    uploaded: Option<BitmapId>,
}

impl BitmapDrawer {
    /// Creates a bitmap drawer from premultiplied RGBA8 pixels.
    ///
    /// `pixels` must contain exactly `desc.width * desc.height * 4` bytes.
    #[must_use]
    pub fn new(desc: BitmapDesc, pixels: Vec<u8>) -> Self {
        Self {
            desc,
            pixels,
            changed: false,
            cycle: DrawCycle::default(),
            uploaded: None,
        }
    }

    /// The current image description.
    #[must_use]
    pub fn desc(&self) -> BitmapDesc {
        self.desc
    }

    /// Replaces the image. The old upload is destroyed and the new pixels
    /// uploaded during the next draw.
    pub fn set_image(&mut self, desc: BitmapDesc, pixels: Vec<u8>) {
        self.desc = desc;
        self.pixels = pixels;
        self.changed = true;
    }

    /// The radius this drawer occupies: half the larger image dimension.
    #[must_use]
    pub fn occupied_radius(&self) -> f64 {
        f64::from(self.desc.width.max(self.desc.height)) / 2.0
    }

    /// Destroys the previous upload, if any, then uploads the current
    /// pixels. Destruction happens first so at most one bitmap is ever
    /// live.
    fn upload(&mut self, surface: &mut dyn Surface) {
        if let Some(old) = self.uploaded.take() {
            surface.destroy_bitmap(old);
        }
        self.uploaded = Some(surface.create_bitmap(self.desc, &self.pixels));
    }
}

impl Drawer for BitmapDrawer {
    fn draw(&mut self, surface: &mut dyn Surface, control: &Control) {
        let phases = self.cycle.begin(control);
        let changed = core::mem::take(&mut self.changed);
        if phases.configure || changed {
            self.upload(surface);
        }
        let Some(bitmap) = self.uploaded else {
            return;
        };

        let center = control.bounded_position(self.occupied_radius());
        #[expect(clippy::cast_possible_truncation, reason = "surface coordinates are f32")]
        let dst = RectF::from_center(
            center.x as f32,
            center.y as f32,
            self.desc.width as f32,
            self.desc.height as f32,
        );
        surface.draw_bitmap(bitmap, dst);
    }

    fn release(&mut self, surface: &mut dyn Surface) {
        if let Some(bitmap) = self.uploaded.take() {
            surface.destroy_bitmap(bitmap);
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
