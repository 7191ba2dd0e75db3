// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete direction classification.

use thumbstick_geometry::{AngleError, sector_of};

/// Classification granularity for [`Direction`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum DirectionType {
    /// Cardinal directions only (`Up`, `Down`, `Left`, `Right`), 90° bands.
    Four,
    /// Cardinals plus diagonals, 45° bands.
    #[default]
    Eight,
}

impl DirectionType {
    /// Number of bands the full circle is divided into.
    #[must_use]
    pub fn bands(self) -> u32 {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
        }
    }
}

/// Compass-style classification of the control's displacement from center.
///
/// `None` means the control sits within the dead zone (or exactly at
/// center) and the displacement is not a directional input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Toward positive X.
    Right,
    /// Toward positive X and positive Y (down the screen).
    DownRight,
    /// Toward positive Y.
    Down,
    /// Toward negative X and positive Y.
    DownLeft,
    /// Toward negative X.
    Left,
    /// Toward negative X and negative Y.
    UpLeft,
    /// Toward negative Y.
    Up,
    /// Toward positive X and negative Y.
    UpRight,
    /// No directional input.
    #[default]
    None,
}

/// Clockwise band order starting at the band centered on 0°.
const EIGHT_WAY: [Direction; 8] = [
    Direction::Right,
    Direction::DownRight,
    Direction::Down,
    Direction::DownLeft,
    Direction::Left,
    Direction::UpLeft,
    Direction::Up,
    Direction::UpRight,
];

const FOUR_WAY: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

impl Direction {
    /// Classifies a non-negative angle in degrees into a direction band.
    ///
    /// Bands are inclusive on the lower bound, exclusive on the upper
    /// bound, wrap at 360°, and are centered on their compass angles.
    ///
    /// # Errors
    ///
    /// Returns [`AngleError`] if `degrees` is negative or NaN.
    pub fn from_degrees(degrees: f64, direction_type: DirectionType) -> Result<Self, AngleError> {
        let sector = sector_of(degrees, direction_type.bands(), true)?;
        let index = (sector - 1) as usize;
        Ok(match direction_type {
            DirectionType::Four => FOUR_WAY[index],
            DirectionType::Eight => EIGHT_WAY[index],
        })
    }

    /// The band-center angle of this direction in degrees, or `None` for
    /// [`Direction::None`].
    ///
    /// Drawers that orient geometry by direction key off this angle rather
    /// than the raw pointer angle, so geometry cached per direction stays
    /// exact.
    #[must_use]
    pub fn angle_degrees(self) -> Option<f64> {
        let index = EIGHT_WAY.iter().position(|&d| d == self)?;
        Some(index as f64 * 45.0)
    }

    /// Returns `true` for the four diagonal directions.
    #[must_use]
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::DownRight | Self::DownLeft | Self::UpLeft | Self::UpRight
        )
    }
}
