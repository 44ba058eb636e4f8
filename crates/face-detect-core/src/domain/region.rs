//! Spatial primitives shared across the pipeline.

use serde::{Deserialize, Serialize};

/// A 2D point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate, left edge is 0.
    pub x: f32,
    /// Vertical coordinate, top edge is 0.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDimensions {
    /// Creates new dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in original-image pixel coordinates.
///
/// Produced by the detector with `x_min <= x_max` and `y_min <= y_max` for
/// any well-formed model output, but the ordering is intentionally not
/// enforced here: the raw regression values drive the extents directly and
/// a degenerate row decodes to a degenerate rectangle rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOfInterest {
    /// Left edge.
    pub x_min: i32,
    /// Top edge.
    pub y_min: i32,
    /// Right edge.
    pub x_max: i32,
    /// Bottom edge.
    pub y_max: i32,
}

impl RegionOfInterest {
    /// Creates a new region from corner coordinates.
    #[must_use]
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Width of the region in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    /// Height of the region in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    /// Center of the region.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn center(&self) -> Point {
        Point::new(
            (self.x_min + self.x_max) as f32 / 2.0,
            (self.y_min + self.y_max) as f32 / 2.0,
        )
    }
}
