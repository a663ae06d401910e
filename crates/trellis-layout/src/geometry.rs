//! Geometric primitives: Size, Rect.

use serde::{Deserialize, Serialize};

use crate::flex::FlexDirection;

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along the main axis of `direction`.
    #[must_use]
    pub const fn main(&self, direction: FlexDirection) -> f32 {
        match direction {
            FlexDirection::Row => self.width,
            FlexDirection::Column => self.height,
        }
    }

    /// Extent along the cross axis of `direction`.
    #[must_use]
    pub const fn cross(&self, direction: FlexDirection) -> f32 {
        match direction {
            FlexDirection::Row => self.height,
            FlexDirection::Column => self.width,
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<[f32; 2]> for Size {
    fn from([width, height]: [f32; 2]) -> Self {
        Self::new(width, height)
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from main/cross axis coordinates.
    #[must_use]
    pub const fn from_axes(
        direction: FlexDirection,
        main_offset: f32,
        cross_offset: f32,
        main_extent: f32,
        cross_extent: f32,
    ) -> Self {
        match direction {
            FlexDirection::Row => Self::new(main_offset, cross_offset, main_extent, cross_extent),
            FlexDirection::Column => {
                Self::new(cross_offset, main_offset, cross_extent, main_extent)
            }
        }
    }

    /// Get the size of this rectangle.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
