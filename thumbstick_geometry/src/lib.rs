// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumbstick Geometry: pure geometric value types and classification helpers.
//!
//! This crate provides the small, side-effect-free building blocks that the
//! rest of the thumbstick stack is assembled from:
//!
//! - [`Size`]: a validated non-negative width/height pair.
//! - [`Circle`]: a validated positive-radius circle with parametric
//!   positioning.
//! - [`angle_of`]: clockwise screen-space angle between two points,
//!   normalized into `[0, 2π)`.
//! - [`sector_of`]: classify an angle into one of `n` equal sectors,
//!   optionally with boundaries shifted so sector 1 is centered on 0°.
//!
//! Points and vectors are [`kurbo`] types; all trigonometry is routed
//! through kurbo so the crate builds in `no_std` mode with the `libm`
//! feature.
//!
//! ## Conventions
//!
//! Angles follow screen conventions: the positive X axis is 0, angles grow
//! clockwise (because Y grows downward), and a full turn is `2π` radians or
//! 360°.
//!
//! ```rust
//! use kurbo::Point;
//! use thumbstick_geometry::{angle_of, sector_of};
//!
//! let center = Point::new(0.0, 0.0);
//!
//! // Straight down the screen is a quarter turn.
//! let angle = angle_of(center, Point::new(0.0, 10.0));
//! assert!((angle - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! // With midpoint offset, 0° sits in the middle of sector 1.
//! assert_eq!(sector_of(0.0, 8, true), Ok(1));
//! assert_eq!(sector_of(90.0, 8, true), Ok(3));
//! ```
//!
//! Constructors that would violate an invariant fail with a typed error
//! ([`DimensionError`], [`RadiusError`], [`AngleError`]) rather than
//! clamping; callers that prefer graceful degradation clamp before
//! constructing.

#![no_std]

mod angle;
mod circle;
mod size;

pub use angle::{AngleError, angle_of, distance, sector_of};
pub use circle::{Circle, RadiusError};
pub use size::{DimensionError, Size};

pub use kurbo::{Point, Vec2};
