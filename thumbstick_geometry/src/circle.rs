// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated positive-radius circle.

use core::fmt;

use kurbo::{Point, Vec2};

/// Error returned when a [`Circle`] radius would be non-positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadiusError {
    /// The offending radius.
    pub radius: f64,
}

impl fmt::Display for RadiusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid circle radius {}: radius must be strictly positive",
            self.radius
        )
    }
}

impl core::error::Error for RadiusError {}

/// A circle with a strictly positive radius.
///
/// The center is stored by value; handing a `Circle` to a caller never
/// aliases any other entity's position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
    center: Point,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns [`RadiusError`] if `radius` is not strictly positive
    /// (zero, negative, or NaN).
    pub fn new(radius: f64, center: Point) -> Result<Self, RadiusError> {
        if radius <= 0.0 || radius.is_nan() {
            return Err(RadiusError { radius });
        }
        Ok(Self { radius, center })
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns a copy of the center.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Sets the radius.
    ///
    /// # Errors
    ///
    /// Returns [`RadiusError`] if `radius` is not strictly positive; the
    /// stored radius is unchanged in that case.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), RadiusError> {
        if radius <= 0.0 || radius.is_nan() {
            return Err(RadiusError { radius });
        }
        self.radius = radius;
        Ok(())
    }

    /// Moves the center.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Returns the point on the circle at the given angle in radians.
    ///
    /// Angles follow screen conventions: 0 points along positive X and
    /// angles grow clockwise (Y grows downward).
    #[must_use]
    pub fn parametric_position(&self, angle: f64) -> Point {
        self.center + self.radius * Vec2::from_angle(angle)
    }

    /// Returns the distance from the center to `point`.
    #[must_use]
    pub fn distance_from(&self, point: Point) -> f64 {
        self.center.distance(point)
    }

    /// Returns `true` if `point` lies inside the circle or on its boundary.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.distance_from(point) <= self.radius
    }
}
