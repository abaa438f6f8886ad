//! Edge drag primitives.
//!
//! Four pure calculations, one per rectangle edge. Each takes the dragged
//! handle's current position on the surface plus the incremental delta and
//! returns the affected region components. Corner anchors compose two of
//! these, midpoint anchors apply exactly one.
//!
//! The right and bottom clamps cap only the upper bound (the surface
//! edge); nothing floors the result at zero, so a hard inward drag can
//! drive width or height negative. The degenerate region that results
//! suppresses repositioning and visibility instead.

use kurbo::Size;

use super::handles::HANDLE_SIZE;
use crate::region::CropRegion;

/// Partial region update: unset components keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionChange {
    /// New left edge coordinate.
    pub left: Option<f64>,
    /// New top edge coordinate.
    pub top: Option<f64>,
    /// New width.
    pub width: Option<f64>,
    /// New height.
    pub height: Option<f64>,
}

impl RegionChange {
    /// Merge this change over `region`, yielding the four final components
    /// as `(left, top, width, height)`.
    pub fn resolve(self, region: &CropRegion) -> (f64, f64, f64, f64) {
        (
            self.left.unwrap_or_else(|| region.left()),
            self.top.unwrap_or_else(|| region.top()),
            self.width.unwrap_or(region.width),
            self.height.unwrap_or(region.height),
        )
    }
}

/// Bottom edge: new height from the handle's vertical travel.
///
/// The handle centerline may not cross the bottom surface edge.
pub fn drag_bottom_edge(handle_top: f64, delta_y: f64, surface: Size, region_top: f64) -> f64 {
    let mut new_top = handle_top + delta_y;
    if new_top + HANDLE_SIZE / 2.0 > surface.height {
        new_top = surface.height - HANDLE_SIZE / 2.0;
    }
    new_top - region_top + HANDLE_SIZE / 2.0
}

/// Right edge: new width from the handle's horizontal travel.
///
/// The handle may not cross the right surface edge.
pub fn drag_right_edge(handle_left: f64, delta_x: f64, surface: Size, region_left: f64) -> f64 {
    let mut new_left = handle_left + delta_x;
    if new_left > surface.width {
        new_left = surface.width;
    }
    new_left - region_left
}

/// Left edge: new left coordinate and width from the handle's horizontal
/// travel. The handle may not cross the left surface edge.
pub fn drag_left_edge(handle_left: f64, delta_x: f64, region_width: f64) -> (f64, f64) {
    let mut new_left = handle_left + delta_x;
    if new_left < 0.0 {
        new_left = -HANDLE_SIZE / 2.0;
    }
    let offset = handle_left - new_left;
    (new_left + HANDLE_SIZE / 2.0, region_width + offset)
}

/// Top edge: new top coordinate and height from the handle's vertical
/// travel. The handle may not cross the top surface edge.
pub fn drag_top_edge(handle_top: f64, delta_y: f64, region_height: f64) -> (f64, f64) {
    let mut new_top = handle_top + delta_y;
    if new_top < 0.0 {
        new_top = -HANDLE_SIZE / 2.0;
    }
    let offset = handle_top - new_top;
    (new_top + HANDLE_SIZE / 2.0, region_height + offset)
}

/// Replace non-finite and negative components with zero.
///
/// Applied only when the surface itself is degenerate: the clamped math can
/// then land below zero or produce no meaningful bound, and the stored
/// region must stay valid geometry.
pub fn sanitize_degenerate(
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64, f64, f64) {
    fn floor_zero(value: f64) -> f64 {
        if !value.is_finite() || value < 0.0 {
            0.0
        } else {
            value
        }
    }
    (
        floor_zero(left),
        floor_zero(top),
        floor_zero(width),
        floor_zero(height),
    )
}
