// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outer border drawer.

use core::any::Any;

use peniko::Color;
use thumbstick_control::Control;
use thumbstick_surface::{Surface, SurfaceExt};

use crate::Drawer;
use crate::properties::clamp_stroke;

/// Strokes the control's outer boundary circle.
///
/// The stroked radius is inset by half the stroke width so the whole
/// stroke stays inside the bounding circle. Like [`CircleDrawer`](crate::circle::CircleDrawer)
/// this drawer is stateless across frames; the outline only depends on the
/// control's extent, not its position.
#[derive(Clone, Debug)]
pub struct BorderDrawer {
    color: Color,
    stroke_width: f64,
}

impl BorderDrawer {
    /// Default stroke width.
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

    /// Creates a border drawer with the default stroke width.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
        }
    }

    /// The stroke color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// The stroke width.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Sets the stroke width, clamped to at least
    /// [`MIN_STROKE_WIDTH`](crate::MIN_STROKE_WIDTH).
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = clamp_stroke(width);
    }
}

impl Drawer for BorderDrawer {
    fn draw(&mut self, surface: &mut dyn Surface, control: &Control) {
        let radius = control.radius() - self.stroke_width / 2.0;
        if radius <= 0.0 {
            return;
        }
        let center = control.center();
        surface.set_stroke_width(self.stroke_width);
        surface.set_paint(self.color);
        #[expect(clippy::cast_possible_truncation, reason = "surface coordinates are f32")]
        surface.stroke_circle(center.x as f32, center.y as f32, radius as f32);
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
