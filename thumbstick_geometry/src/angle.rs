// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle measurement and sector classification.

use core::f64::consts::TAU;
use core::fmt;

use kurbo::Point;

/// Error returned when a negative angle is passed to [`sector_of`].
///
/// Sector classification expects angles already normalized into
/// `[0, 360)` degrees (or at least non-negative); normalize with
/// [`angle_of`] or by wrapping before classifying.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AngleError {
    /// The offending angle, in degrees.
    pub angle: f64,
}

impl fmt::Display for AngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid angle {}: sector classification requires a non-negative angle",
            self.angle
        )
    }
}

impl core::error::Error for AngleError {}

/// Returns the Euclidean distance between two points.
///
/// Never negative; `distance(a, a)` is exactly zero.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Returns the clockwise screen-space angle from `from` to `to`, in
/// radians normalized into `[0, 2π)`.
///
/// Measured as `atan2(Δy, Δx)` with `2π` added when negative. The angle of
/// a point to itself is defined as `0`.
#[must_use]
pub fn angle_of(from: Point, to: Point) -> f64 {
    let angle = (to - from).atan2();
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Classifies a non-negative angle (in degrees) into one of `sectors`
/// equal sectors, returning a 1-based index in `[1, sectors]`.
///
/// Sector boundaries start at 0° and proceed clockwise. With
/// `midpoint_offset`, boundaries shift back by half a sector so that
/// sector 1 is centered on 0° (the natural layout for compass-style
/// classification). Boundaries are inclusive on the lower bound and
/// exclusive on the upper bound, wrapping at 360°.
///
/// Angles at or above 360° wrap; `sectors` of zero is a caller bug and is
/// treated as a single full-circle sector in release builds.
///
/// # Errors
///
/// Returns [`AngleError`] if `angle` is negative or NaN.
pub fn sector_of(angle: f64, sectors: u32, midpoint_offset: bool) -> Result<u32, AngleError> {
    if angle < 0.0 || angle.is_nan() {
        return Err(AngleError { angle });
    }
    debug_assert!(sectors > 0, "sector count must be positive");
    let sectors = sectors.max(1);

    let span = 360.0 / f64::from(sectors);
    let shifted = if midpoint_offset {
        angle + span / 2.0
    } else {
        angle
    };
    // Truncating cast is floor for non-negative values; this avoids float
    // intrinsics unavailable in core.
    #[expect(clippy::cast_possible_truncation, reason = "wrapped angle / span < sectors")]
    let index = (wrap_degrees(shifted) / span) as u32;
    Ok(index.min(sectors - 1) + 1)
}

/// Wraps a non-negative angle in degrees into `[0, 360)`.
fn wrap_degrees(angle: f64) -> f64 {
    if angle < 360.0 {
        return angle;
    }
    #[expect(clippy::cast_possible_truncation, reason = "truncation is the floor we want")]
    let turns = (angle / 360.0) as u64 as f64;
    let wrapped = angle - turns * 360.0;
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn angle_of_covers_the_four_axes() {
        let c = Point::new(100.0, 100.0);
        assert_eq!(angle_of(c, Point::new(150.0, 100.0)), 0.0);
        assert!((angle_of(c, Point::new(100.0, 150.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((angle_of(c, Point::new(50.0, 100.0)) - PI).abs() < 1e-12);
        assert!((angle_of(c, Point::new(100.0, 50.0)) - 3.0 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn angle_of_is_zero_for_coincident_points() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(angle_of(p, p), 0.0);
    }

    #[test]
    fn angle_of_never_leaves_positive_range() {
        let c = Point::ZERO;
        for i in 0..360 {
            let theta = TAU * f64::from(i) / 360.0;
            let target = Point::new(theta.cos() * 10.0, theta.sin() * 10.0);
            let angle = angle_of(c, target);
            assert!((0.0..TAU).contains(&angle), "angle {angle} out of range");
        }
    }

    #[test]
    fn sector_of_rejects_negative_angles() {
        assert_eq!(sector_of(-0.1, 8, true), Err(AngleError { angle: -0.1 }));
        assert!(sector_of(f64::NAN, 8, true).is_err());
    }

    #[test]
    fn sector_of_without_offset_starts_at_zero() {
        assert_eq!(sector_of(0.0, 4, false), Ok(1));
        assert_eq!(sector_of(89.9, 4, false), Ok(1));
        assert_eq!(sector_of(90.0, 4, false), Ok(2));
        assert_eq!(sector_of(359.9, 4, false), Ok(4));
    }

    #[test]
    fn sector_of_with_offset_centers_sector_one_on_zero() {
        // Eight 45-degree sectors: sector 1 spans [337.5, 360) ∪ [0, 22.5).
        assert_eq!(sector_of(0.0, 8, true), Ok(1));
        assert_eq!(sector_of(22.4, 8, true), Ok(1));
        assert_eq!(sector_of(22.5, 8, true), Ok(2));
        assert_eq!(sector_of(337.4, 8, true), Ok(8));
        assert_eq!(sector_of(337.5, 8, true), Ok(1));
        assert_eq!(sector_of(359.9, 8, true), Ok(1));
    }

    #[test]
    fn sector_of_is_surjective_over_a_full_sweep() {
        for &sectors in &[4_u32, 8] {
            for &offset in &[false, true] {
                let mut seen = [false; 9];
                let mut degrees = 0.0;
                while degrees < 360.0 {
                    let sector = sector_of(degrees, sectors, offset).unwrap();
                    assert!((1..=sectors).contains(&sector), "sector {sector} out of range");
                    seen[sector as usize] = true;
                    degrees += 0.25;
                }
                for s in 1..=sectors {
                    assert!(seen[s as usize], "sector {s} never produced");
                }
            }
        }
    }

    #[test]
    fn sector_of_wraps_angles_beyond_a_full_turn() {
        assert_eq!(sector_of(360.0, 8, true), sector_of(0.0, 8, true));
        assert_eq!(sector_of(450.0, 4, false), sector_of(90.0, 4, false));
        assert_eq!(sector_of(720.0 + 45.0, 8, true), sector_of(45.0, 8, true));
    }
}
