// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration ranges shared by the drawers.
//!
//! Visual configuration degrades gracefully: values outside these ranges
//! clamp to the nearest bound instead of failing.

/// Smallest accepted circle ratio (fraction of the control's outer radius).
pub const CIRCLE_RATIO_MIN: f64 = 0.1;

/// Largest accepted circle ratio.
pub const CIRCLE_RATIO_MAX: f64 = 0.8;

/// Smallest accepted stroke width.
pub const MIN_STROKE_WIDTH: f64 = 1.0;

/// Smallest accepted arc sweep, in degrees.
pub const SWEEP_MIN_DEGREES: f64 = 30.0;

/// Largest accepted arc sweep, in degrees.
pub const SWEEP_MAX_DEGREES: f64 = 180.0;

pub(crate) fn clamp_ratio(ratio: f64) -> f64 {
    ratio.clamp(CIRCLE_RATIO_MIN, CIRCLE_RATIO_MAX)
}

pub(crate) fn clamp_stroke(width: f64) -> f64 {
    if width < MIN_STROKE_WIDTH {
        MIN_STROKE_WIDTH
    } else {
        width
    }
}

pub(crate) fn clamp_sweep(degrees: f64) -> f64 {
    degrees.clamp(SWEEP_MIN_DEGREES, SWEEP_MAX_DEGREES)
}
