// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumbstick Control: the geometric constraint and classification engine.
//!
//! [`Control`] owns the draggable point of an on-screen analog stick: its
//! current position, the center and outer radius derived from the host
//! widget size, and a configurable dead zone. It enforces two invariants at
//! all times:
//!
//! - position and center coordinates are never negative;
//! - the position never lies outside the outer bounding circle (raw
//!   positions past the boundary are projected radially back onto it).
//!
//! On top of the valid position it derives an angle and a discrete
//! [`Direction`], classified into four or eight compass-style bands
//! depending on [`DirectionType`].
//!
//! ## Band layout
//!
//! One canonical band table is used everywhere: bands are inclusive on the
//! lower bound, exclusive on the upper bound, and wrap at 360°. Each band
//! is centered on its compass angle, so in eight-way mode `Right` covers
//! `[337.5°, 360°) ∪ [0°, 22.5°)` and the bands proceed clockwise in 45°
//! steps (screen coordinates: `Down` is toward positive Y).
//!
//! ```rust
//! use thumbstick_control::{Control, Direction, DirectionType};
//! use thumbstick_geometry::Size;
//!
//! let mut control = Control::new(4.0, DirectionType::Eight);
//! control.on_resize(Size::new(200, 200).unwrap());
//!
//! // Drag right of center, past the dead zone.
//! control.set_position(180.0, 100.0).unwrap();
//! assert_eq!(control.direction(), Direction::Right);
//!
//! // Dragging past the boundary clamps onto it.
//! control.set_position(1000.0, 100.0).unwrap();
//! assert!(control.distance() <= control.radius() + 1e-9);
//! ```

#![no_std]

mod control;
mod direction;

pub use control::{Control, PositionError};
pub use direction::{Direction, DirectionType};
