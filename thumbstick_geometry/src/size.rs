// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated width/height pair.

use core::fmt;

/// Error returned when a [`Size`] dimension would be negative.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DimensionError {
    /// The offending width.
    pub width: i32,
    /// The offending height.
    pub height: i32,
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid size {}x{}: dimensions must be non-negative",
            self.width, self.height
        )
    }
}

impl core::error::Error for DimensionError {}

/// A non-negative width/height pair in integer device units.
///
/// Both dimensions are guaranteed to be `>= 0` for the lifetime of the
/// value; constructing or mutating to a negative dimension fails with
/// [`DimensionError`] and leaves existing state untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    /// Creates a new size.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] if either dimension is negative.
    pub fn new(width: i32, height: i32) -> Result<Self, DimensionError> {
        if width < 0 || height < 0 {
            return Err(DimensionError { width, height });
        }
        Ok(Self { width, height })
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Sets the width.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] if `width` is negative; the stored width
    /// is unchanged in that case.
    pub fn set_width(&mut self, width: i32) -> Result<(), DimensionError> {
        if width < 0 {
            return Err(DimensionError {
                width,
                height: self.height,
            });
        }
        self.width = width;
        Ok(())
    }

    /// Sets the height.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] if `height` is negative; the stored height
    /// is unchanged in that case.
    pub fn set_height(&mut self, height: i32) -> Result<(), DimensionError> {
        if height < 0 {
            return Err(DimensionError {
                width: self.width,
                height,
            });
        }
        self.height = height;
        Ok(())
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the smaller of the two dimensions.
    #[must_use]
    pub fn min_dimension(&self) -> i32 {
        self.width.min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_negative_dimensions() {
        let size = Size::new(120, 80).unwrap();
        assert_eq!(size.width(), 120);
        assert_eq!(size.height(), 80);
        assert!(!size.is_empty());

        assert!(Size::new(0, 0).unwrap().is_empty());
    }

    #[test]
    fn new_rejects_negative_dimensions() {
        assert_eq!(
            Size::new(-1, 10),
            Err(DimensionError {
                width: -1,
                height: 10
            })
        );
        assert!(Size::new(10, -1).is_err());
        assert!(Size::new(-3, -4).is_err());
    }

    #[test]
    fn failed_mutation_leaves_value_unchanged() {
        let mut size = Size::new(30, 40).unwrap();

        assert!(size.set_width(-5).is_err());
        assert_eq!(size.width(), 30);

        assert!(size.set_height(-5).is_err());
        assert_eq!(size.height(), 40);

        size.set_width(50).unwrap();
        size.set_height(60).unwrap();
        assert_eq!((size.width(), size.height()), (50, 60));
    }

    #[test]
    fn min_dimension_picks_the_smaller_side() {
        assert_eq!(Size::new(30, 40).unwrap().min_dimension(), 30);
        assert_eq!(Size::new(90, 40).unwrap().min_dimension(), 40);
    }
}
