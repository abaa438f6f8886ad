//! Crop region state.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// The authoritative crop rectangle: top-left corner plus extent.
///
/// All four components change together through [`CropRegion::update`];
/// nothing else mutates them, so readers never observe a half-applied
/// resize. Zero-area regions are valid and suppress handle repositioning
/// and visibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRegion {
    /// Top-left corner position.
    pub position: Point,
    /// Width of the region.
    pub width: f64,
    /// Height of the region.
    pub height: f64,
}

impl CropRegion {
    /// Create a new region.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Replace all four components atomically.
    ///
    /// No validation happens here: clamping to the surface is the caller's
    /// responsibility, and negative or zero extents are stored as-is.
    pub fn update(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.position = Point::new(left, top);
        self.width = width;
        self.height = height;
    }

    /// Left edge coordinate.
    pub fn left(&self) -> f64 {
        self.position.x
    }

    /// Top edge coordinate.
    pub fn top(&self) -> f64 {
        self.position.y
    }

    /// Get the region as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Whether the region has no positive area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for CropRegion {
    fn default() -> Self {
        Self::new(Point::ZERO, 0.0, 0.0)
    }
}
