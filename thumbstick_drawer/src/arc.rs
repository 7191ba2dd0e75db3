// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional arc drawer.

use core::any::Any;

use peniko::Color;
use thumbstick_control::Control;
use thumbstick_surface::{Surface, SurfaceExt};

use crate::Drawer;
use crate::cycle::DrawCycle;
use crate::properties::{clamp_stroke, clamp_sweep};

/// Strokes an arc near the outer boundary, centered on the current
/// direction's compass angle.
///
/// Nothing is drawn while the control reports no direction. The arc's
/// start angle is direction-dependent geometry: it is recomputed in the
/// prepare phase when the direction band changes, and when the sweep
/// configuration changes, but not on every frame.
#[derive(Clone, Debug)]
pub struct ArcDrawer {
    color: Color,
    stroke_width: f64,
    sweep_degrees: f64,
    changed: bool,
    cycle: DrawCycle,
    start_degrees: Option<f64>,
}

impl ArcDrawer {
    /// Default stroke width.
    pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;
    /// Default sweep in degrees.
    pub const DEFAULT_SWEEP_DEGREES: f64 = 90.0;

    /// Creates an arc drawer with default geometry.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self::with_geometry(color, Self::DEFAULT_STROKE_WIDTH, Self::DEFAULT_SWEEP_DEGREES)
    }

    /// Creates an arc drawer with explicit geometry, clamped into range.
    #[must_use]
    pub fn with_geometry(color: Color, stroke_width: f64, sweep_degrees: f64) -> Self {
        Self {
            color,
            stroke_width: clamp_stroke(stroke_width),
            sweep_degrees: clamp_sweep(sweep_degrees),
            changed: false,
            cycle: DrawCycle::default(),
            start_degrees: None,
        }
    }

    /// The arc color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the arc color.
    pub fn set_color(&mut self, color: Color) {
        if self.color != color {
            self.color = color;
            self.changed = true;
        }
    }

    /// The stroke width.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Sets the stroke width, clamped to at least
    /// [`MIN_STROKE_WIDTH`](crate::MIN_STROKE_WIDTH).
    pub fn set_stroke_width(&mut self, width: f64) {
        let width = clamp_stroke(width);
        if self.stroke_width != width {
            self.stroke_width = width;
            self.changed = true;
        }
    }

    /// The sweep in degrees.
    #[must_use]
    pub fn sweep_degrees(&self) -> f64 {
        self.sweep_degrees
    }

    /// Sets the sweep, clamped into
    /// [`SWEEP_MIN_DEGREES`](crate::SWEEP_MIN_DEGREES)..=[`SWEEP_MAX_DEGREES`](crate::SWEEP_MAX_DEGREES).
    pub fn set_sweep_degrees(&mut self, degrees: f64) {
        let degrees = clamp_sweep(degrees);
        if self.sweep_degrees != degrees {
            self.sweep_degrees = degrees;
            self.changed = true;
        }
    }

    /// Recomputes the direction-dependent start angle.
    fn prepare(&mut self, control: &Control) {
        self.start_degrees = control.direction().angle_degrees().map(|center| {
            let start = center - self.sweep_degrees / 2.0;
            if start < 0.0 { start + 360.0 } else { start }
        });
    }
}

impl Drawer for ArcDrawer {
    fn draw(&mut self, surface: &mut dyn Surface, control: &Control) {
        let phases = self.cycle.begin(control);
        let changed = core::mem::take(&mut self.changed);
        if phases.prepare || changed {
            self.prepare(control);
        }

        let Some(start) = self.start_degrees else {
            return;
        };
        let radius = control.radius() - self.stroke_width;
        if radius <= 0.0 {
            return;
        }

        let center = control.center();
        surface.set_stroke_width(self.stroke_width);
        surface.set_paint(self.color);
        #[expect(clippy::cast_possible_truncation, reason = "surface coordinates are f32")]
        surface.stroke_arc(
            center.x as f32,
            center.y as f32,
            radius as f32,
            start as f32,
            self.sweep_degrees as f32,
        );
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
