// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filled circle drawer (the "knob").

use core::any::Any;

use peniko::Color;
use thumbstick_control::Control;
use thumbstick_surface::{Surface, SurfaceExt};

use crate::Drawer;
use crate::properties::clamp_ratio;

/// How a [`CircleDrawer`] derives its radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CircleRadius {
    /// A radius in local units, independent of the control's extent.
    Fixed(f64),
    /// A fraction of the control's outer radius. Values clamp into
    /// [`CIRCLE_RATIO_MIN`](crate::CIRCLE_RATIO_MIN)..=[`CIRCLE_RATIO_MAX`](crate::CIRCLE_RATIO_MAX).
    Ratio(f64),
}

/// Fills a circle at the control's position.
///
/// This drawer is stateless across frames: the circle's center and radius
/// are cheap to derive, so nothing is cached and there is no prepare
/// phase. When `bounded` is set the circle's center travel is limited so
/// the filled disc never crosses the control's outer boundary.
#[derive(Clone, Debug)]
pub struct CircleDrawer {
    color: Color,
    radius: CircleRadius,
    bounded: bool,
}

impl CircleDrawer {
    /// Creates a circle drawer.
    #[must_use]
    pub fn new(color: Color, radius: CircleRadius, bounded: bool) -> Self {
        Self {
            color,
            radius: clamp_radius(radius),
            bounded,
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

    /// The radius configuration.
    #[must_use]
    pub fn radius(&self) -> CircleRadius {
        self.radius
    }

    /// Sets the radius configuration, clamping ratios into range.
    pub fn set_radius(&mut self, radius: CircleRadius) {
        self.radius = clamp_radius(radius);
    }

    /// Whether the circle is kept inside the control's outer boundary.
    #[must_use]
    pub fn bounded(&self) -> bool {
        self.bounded
    }

    /// Sets whether the circle is kept inside the outer boundary.
    pub fn set_bounded(&mut self, bounded: bool) {
        self.bounded = bounded;
    }

    /// The radius this drawer occupies for the given control extent.
    #[must_use]
    pub fn occupied_radius(&self, control: &Control) -> f64 {
        match self.radius {
            CircleRadius::Fixed(radius) => radius,
            CircleRadius::Ratio(ratio) => control.radius() * ratio,
        }
    }
}

impl Drawer for CircleDrawer {
    fn draw(&mut self, surface: &mut dyn Surface, control: &Control) {
        let radius = self.occupied_radius(control);
        if radius <= 0.0 {
            return;
        }
        let center = if self.bounded {
            control.bounded_position(radius)
        } else {
            control.position()
        };
        surface.set_paint(self.color);
        #[expect(clippy::cast_possible_truncation, reason = "surface coordinates are f32")]
        surface.fill_circle(center.x as f32, center.y as f32, radius as f32);
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn clamp_radius(radius: CircleRadius) -> CircleRadius {
    match radius {
        CircleRadius::Fixed(_) => radius,
        CircleRadius::Ratio(ratio) => CircleRadius::Ratio(clamp_ratio(ratio)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thumbstick_control::DirectionType;
    use thumbstick_geometry::Size;
    use thumbstick_surface::trace::TraceSurface;
    use thumbstick_surface::{DrawOp, SurfaceOp};

    fn control() -> Control {
        let mut control = Control::new(0.0, DirectionType::Eight);
        control.on_resize(Size::new(200, 200).unwrap());
        control
    }

    #[test]
    fn ratio_radius_scales_with_the_control() {
        let mut drawer = CircleDrawer::new(Color::WHITE, CircleRadius::Ratio(0.5), false);
        let mut surface = TraceSurface::new();
        drawer.draw(&mut surface, &control());

        assert!(matches!(
            surface.ops().last(),
            Some(SurfaceOp::Draw(DrawOp::FillCircle { cx, cy, radius }))
                if *cx == 100.0 && *cy == 100.0 && *radius == 50.0
        ));
    }

    #[test]
    fn fixed_radius_ignores_the_control_extent() {
        let drawer = CircleDrawer::new(Color::WHITE, CircleRadius::Fixed(12.0), false);
        assert_eq!(drawer.occupied_radius(&control()), 12.0);
    }

    #[test]
    fn out_of_range_ratios_clamp_silently() {
        let drawer = CircleDrawer::new(Color::WHITE, CircleRadius::Ratio(0.95), false);
        assert_eq!(drawer.radius(), CircleRadius::Ratio(crate::CIRCLE_RATIO_MAX));

        let mut drawer = drawer;
        drawer.set_radius(CircleRadius::Ratio(0.01));
        assert_eq!(drawer.radius(), CircleRadius::Ratio(crate::CIRCLE_RATIO_MIN));
    }

    #[test]
    fn bounded_circle_stays_inside_the_outer_boundary() {
        let mut drawer = CircleDrawer::new(Color::WHITE, CircleRadius::Fixed(40.0), true);
        let mut control = control();
        control.set_position(200.0, 100.0).unwrap();

        let mut surface = TraceSurface::new();
        drawer.draw(&mut surface, &control);

        // Travel limit is 100 - 40 = 60, so the center sits at x = 160.
        assert!(matches!(
            surface.ops().last(),
            Some(SurfaceOp::Draw(DrawOp::FillCircle { cx, .. })) if *cx == 160.0
        ));
    }

    #[test]
    fn unbounded_circle_follows_the_raw_position() {
        let mut drawer = CircleDrawer::new(Color::WHITE, CircleRadius::Fixed(40.0), false);
        let mut control = control();
        control.set_position(200.0, 100.0).unwrap();

        let mut surface = TraceSurface::new();
        drawer.draw(&mut surface, &control);
        assert!(matches!(
            surface.ops().last(),
            Some(SurfaceOp::Draw(DrawOp::FillCircle { cx, .. })) if *cx == 200.0
        ));
    }

    #[test]
    fn zero_extent_control_draws_nothing() {
        let mut drawer = CircleDrawer::new(Color::WHITE, CircleRadius::Ratio(0.5), false);
        let control = Control::new(0.0, DirectionType::Eight);
        let mut surface = TraceSurface::new();
        drawer.draw(&mut surface, &control);
        assert!(surface.ops().is_empty());
    }
}
