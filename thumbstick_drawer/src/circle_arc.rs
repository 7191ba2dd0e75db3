// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Knob-plus-arc drawer.

use core::any::Any;

use peniko::Color;
use thumbstick_control::Control;
use thumbstick_surface::Surface;

use crate::Drawer;
use crate::arc::ArcDrawer;
use crate::circle::{CircleDrawer, CircleRadius};

/// Draws a directional arc behind a filled knob circle.
///
/// The arc half delegates to [`ArcDrawer`] and so only appears while the
/// control reports a direction; the knob is always drawn, after the arc,
/// so it sits on top.
#[derive(Clone, Debug)]
pub struct CircleArcDrawer {
    arc: ArcDrawer,
    circle: CircleDrawer,
}

impl CircleArcDrawer {
    /// Creates a knob-plus-arc drawer with the given colors.
    ///
    /// The knob takes a bounded half-ratio radius; the arc keeps
    /// [`ArcDrawer`]'s default geometry.
    #[must_use]
    pub fn new(arc_color: Color, circle_color: Color) -> Self {
        Self {
            arc: ArcDrawer::new(arc_color),
            circle: CircleDrawer::new(circle_color, CircleRadius::Ratio(0.5), true),
        }
    }

    /// The arc half, for configuration.
    pub fn arc_mut(&mut self) -> &mut ArcDrawer {
        &mut self.arc
    }

    /// The knob half, for configuration.
    pub fn circle_mut(&mut self) -> &mut CircleDrawer {
        &mut self.circle
    }
}

impl Drawer for CircleArcDrawer {
    fn draw(&mut self, surface: &mut dyn Surface, control: &Control) {
        self.arc.draw(surface, control);
        self.circle.draw(surface, control);
    }

    fn release(&mut self, surface: &mut dyn Surface) {
        self.arc.release(surface);
        self.circle.release(surface);
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use thumbstick_control::DirectionType;
    use thumbstick_geometry::Size;
    use thumbstick_surface::trace::TraceSurface;
    use thumbstick_surface::DrawOp;

    fn control() -> Control {
        let mut control = Control::new(4.0, DirectionType::Eight);
        control.on_resize(Size::new(200, 200).unwrap());
        control
    }

    #[test]
    fn at_center_only_the_knob_is_drawn() {
        let mut drawer = CircleArcDrawer::new(Color::WHITE, Color::BLACK);
        let mut surface = TraceSurface::new();
        drawer.draw(&mut surface, &control());

        let ops: Vec<&DrawOp> = surface.draw_ops().collect();
        assert_eq!(ops.len(), 1);
        assert!(matches!(ops[0], DrawOp::FillCircle { .. }));
    }

    #[test]
    fn with_a_direction_the_arc_is_drawn_under_the_knob() {
        let mut drawer = CircleArcDrawer::new(Color::WHITE, Color::BLACK);
        let mut control = control();
        control.set_position(190.0, 100.0).unwrap();

        let mut surface = TraceSurface::new();
        drawer.draw(&mut surface, &control);

        let ops: Vec<&DrawOp> = surface.draw_ops().collect();
        assert_eq!(ops.len(), 2);
        assert!(matches!(ops[0], DrawOp::StrokeArc { .. }));
        assert!(matches!(ops[1], DrawOp::FillCircle { .. }));
    }

    #[test]
    fn halves_are_individually_configurable() {
        let mut drawer = CircleArcDrawer::new(Color::WHITE, Color::BLACK);
        drawer.arc_mut().set_sweep_degrees(60.0);
        drawer.circle_mut().set_bounded(false);

        assert_eq!(drawer.arc.sweep_degrees(), 60.0);
        assert!(!drawer.circle.bounded());
    }
}
