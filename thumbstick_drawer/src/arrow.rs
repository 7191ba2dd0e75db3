// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional arrow drawer.

use core::any::Any;

use kurbo::{BezPath, Vec2};
use peniko::Color;
use thumbstick_control::Control;
use thumbstick_surface::{DrawOp, Surface, SurfaceExt};

use crate::Drawer;
use crate::cycle::DrawCycle;

/// Fills a triangular arrow pointing along the current direction, just
/// inside the control's outer boundary.
///
/// Nothing is drawn while the control reports no direction. The triangle
/// path is direction-dependent geometry: it is rebuilt in the prepare
/// phase when the direction band changes, not on every frame.
#[derive(Clone, Debug)]
pub struct ArrowDrawer {
    color: Color,
    length: f64,
    width: f64,
    margin: f64,
    changed: bool,
    cycle: DrawCycle,
    path: Option<BezPath>,
}

impl ArrowDrawer {
    /// Default arrow length, tip to base.
    pub const DEFAULT_LENGTH: f64 = 12.0;
    /// Default base width.
    pub const DEFAULT_WIDTH: f64 = 14.0;
    /// Default gap between the tip and the outer boundary.
    pub const DEFAULT_MARGIN: f64 = 2.0;

    /// Creates an arrow drawer with default geometry.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            length: Self::DEFAULT_LENGTH,
            width: Self::DEFAULT_WIDTH,
            margin: Self::DEFAULT_MARGIN,
            changed: false,
            cycle: DrawCycle::default(),
            path: None,
        }
    }

    /// The fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the fill color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the tip-to-base length.
    pub fn set_length(&mut self, length: f64) {
        if self.length != length {
            self.length = length;
            self.changed = true;
        }
    }

    /// Sets the base width.
    pub fn set_width(&mut self, width: f64) {
        if self.width != width {
            self.width = width;
            self.changed = true;
        }
    }

    /// Sets the gap between the tip and the outer boundary.
    pub fn set_margin(&mut self, margin: f64) {
        if self.margin != margin {
            self.margin = margin;
            self.changed = true;
        }
    }

    /// Rebuilds the triangle for the current direction band.
    fn prepare(&mut self, control: &Control) {
        self.path = control.direction().angle_degrees().map(|degrees| {
            let unit = Vec2::from_angle(degrees.to_radians());
            let tip_distance = control.radius() - self.margin;
            let tip = control.center() + tip_distance * unit;
            let base = control.center() + (tip_distance - self.length) * unit;
            let across = Vec2::new(-unit.y, unit.x) * (self.width / 2.0);

            let mut path = BezPath::new();
            path.move_to(tip);
            path.line_to(base + across);
            path.line_to(base - across);
            path.close_path();
            path
        });
    }
}

impl Drawer for ArrowDrawer {
    fn draw(&mut self, surface: &mut dyn Surface, control: &Control) {
        let phases = self.cycle.begin(control);
        let changed = core::mem::take(&mut self.changed);
        if phases.prepare || changed {
            self.prepare(control);
        }

        let Some(path) = &self.path else {
            return;
        };
        surface.set_paint(self.color);
        surface.draw(DrawOp::FillPath(path.clone()));
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
