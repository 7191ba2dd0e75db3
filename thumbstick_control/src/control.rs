// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The central constraint engine.

use core::fmt;

use kurbo::Point;
use thumbstick_geometry::{Size, angle_of, distance};

use crate::direction::{Direction, DirectionType};

/// Error returned when a negative coordinate is passed to
/// [`Control::set_position`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionError {
    /// The offending X coordinate.
    pub x: f64,
    /// The offending Y coordinate.
    pub y: f64,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid position ({}, {}): coordinates must be non-negative",
            self.x, self.y
        )
    }
}

impl core::error::Error for PositionError {}

/// Owns the analog stick's position and keeps it geometrically valid.
///
/// The control tracks a mutable position and center, the outer bounding
/// radius derived from the host size, a dead-zone radius, and the
/// classification granularity. After every mutation these invariants hold:
///
/// - `position` and `center` coordinates are `>= 0`;
/// - `distance(position, center) <= radius`.
///
/// Positions handed out by [`Control::position`] and [`Control::center`]
/// are value snapshots; internal state can never be mutated through a
/// returned handle.
#[derive(Clone, Debug, PartialEq)]
pub struct Control {
    position: Point,
    center: Point,
    radius: f64,
    invalid_radius: f64,
    direction_type: DirectionType,
}

impl Control {
    /// Creates a control with no extent yet.
    ///
    /// Center, position, and radius stay at zero until the first
    /// [`Control::on_resize`]. A negative `invalid_radius` clamps to zero
    /// rather than failing; dead-zone configuration degrades gracefully.
    #[must_use]
    pub fn new(invalid_radius: f64, direction_type: DirectionType) -> Self {
        Self {
            position: Point::ZERO,
            center: Point::ZERO,
            radius: 0.0,
            invalid_radius: clamp_non_negative(invalid_radius),
            direction_type,
        }
    }

    /// Adopts a new host extent.
    ///
    /// The center moves to the middle of the size, the outer radius becomes
    /// half the smaller dimension (so the bounding circle always fits), and
    /// the position resets to center.
    pub fn on_resize(&mut self, size: Size) {
        self.center = Point::new(
            f64::from(size.width()) / 2.0,
            f64::from(size.height()) / 2.0,
        );
        self.radius = f64::from(size.min_dimension()) / 2.0;
        self.position = self.center;
    }

    /// Moves the position, clamping it onto the outer bounding circle.
    ///
    /// The raw position is stored first; if it lies outside the bounding
    /// circle it is projected radially back onto the boundary, preserving
    /// its angle. On return `distance(position, center) <= radius` holds.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] if either coordinate is negative or NaN;
    /// the previous valid position is kept in that case.
    pub fn set_position(&mut self, x: f64, y: f64) -> Result<(), PositionError> {
        if x < 0.0 || y < 0.0 || x.is_nan() || y.is_nan() {
            return Err(PositionError { x, y });
        }
        self.position = Point::new(x, y);
        let dist = self.distance();
        if dist > self.radius {
            // Radial projection onto the boundary. The result is a convex
            // combination of center and the raw position, so coordinates
            // stay non-negative.
            let scale = self.radius / dist;
            self.position = self.center + scale * (self.position - self.center);
        }
        Ok(())
    }

    /// Snaps the position back to center. Always valid, never clamped.
    pub fn to_center(&mut self) {
        self.position = self.center;
    }

    /// Returns `true` if the position currently equals the center.
    #[must_use]
    pub fn is_at_center(&self) -> bool {
        self.position == self.center
    }

    /// A snapshot of the current position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// A snapshot of the current center.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Distance from the position to the center.
    #[must_use]
    pub fn distance(&self) -> f64 {
        distance(self.center, self.position)
    }

    /// Clockwise screen-space angle from center to position, radians in
    /// `[0, 2π)`. Zero when the control is at center.
    #[must_use]
    pub fn angle(&self) -> f64 {
        angle_of(self.center, self.position)
    }

    /// The outer bounding radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The dead-zone radius.
    #[must_use]
    pub fn invalid_radius(&self) -> f64 {
        self.invalid_radius
    }

    /// Sets the dead-zone radius, clamping negative values to zero.
    pub fn set_invalid_radius(&mut self, invalid_radius: f64) {
        self.invalid_radius = clamp_non_negative(invalid_radius);
    }

    /// The classification granularity.
    #[must_use]
    pub fn direction_type(&self) -> DirectionType {
        self.direction_type
    }

    /// Switches between four- and eight-way classification.
    pub fn set_direction_type(&mut self, direction_type: DirectionType) {
        self.direction_type = direction_type;
    }

    /// Classifies the current displacement.
    ///
    /// Returns [`Direction::None`] while the distance from center does not
    /// exceed the dead-zone radius; otherwise the band of the current angle
    /// under the configured [`DirectionType`].
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.distance() <= self.invalid_radius {
            return Direction::None;
        }
        let degrees = self.angle().to_degrees();
        // `angle()` is never negative, so classification cannot fail.
        Direction::from_degrees(degrees, self.direction_type).unwrap_or(Direction::None)
    }

    /// Travel limit for a shape that occupies `occupied` of its own radius:
    /// the outer radius minus the occupied radius, floored at zero.
    #[must_use]
    pub fn bounded_radius(&self, occupied: f64) -> f64 {
        clamp_non_negative(self.radius - occupied)
    }

    /// The current position with its travel limited to
    /// [`Control::bounded_radius`], so a shape of the given occupied radius
    /// drawn at the returned point never crosses the outer boundary.
    #[must_use]
    pub fn bounded_position(&self, occupied: f64) -> Point {
        let travel = self.bounded_radius(occupied);
        let dist = self.distance();
        if dist <= travel {
            return self.position;
        }
        self.center + (travel / dist) * (self.position - self.center)
    }
}

fn clamp_non_negative(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}
