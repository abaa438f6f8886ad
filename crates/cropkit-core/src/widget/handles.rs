//! Handle definitions for crop-region manipulation.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::region::CropRegion;

/// Side length of a handle square, in surface units.
pub const HANDLE_SIZE: f64 = 10.0;

/// The eight fixed perimeter positions a handle can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleAnchor {
    TopLeft,
    TopMiddle,
    TopRight,
    RightMiddle,
    BottomRight,
    BottomMiddle,
    BottomLeft,
    LeftMiddle,
}

/// Horizontal rectangle edge a drag moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// Vertical rectangle edge a drag moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// Resize cursor a host should show while hovering a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeCursor {
    /// Diagonal, northwest/southeast.
    NwseResize,
    /// Diagonal, northeast/southwest.
    NeswResize,
    /// Vertical.
    NsResize,
    /// Horizontal.
    EwResize,
}

impl HandleAnchor {
    /// All anchors, in creation order.
    pub const ALL: [HandleAnchor; 8] = [
        HandleAnchor::TopLeft,
        HandleAnchor::TopMiddle,
        HandleAnchor::TopRight,
        HandleAnchor::RightMiddle,
        HandleAnchor::BottomRight,
        HandleAnchor::BottomMiddle,
        HandleAnchor::BottomLeft,
        HandleAnchor::LeftMiddle,
    ];

    /// Position of this anchor on the region perimeter.
    pub fn position_on(self, region: &CropRegion) -> Point {
        let left = region.left();
        let top = region.top();
        match self {
            HandleAnchor::TopLeft => Point::new(left, top),
            HandleAnchor::TopMiddle => Point::new(left + region.width / 2.0, top),
            HandleAnchor::TopRight => Point::new(left + region.width, top),
            HandleAnchor::RightMiddle => {
                Point::new(left + region.width, top + region.height / 2.0)
            }
            HandleAnchor::BottomRight => Point::new(left + region.width, top + region.height),
            HandleAnchor::BottomMiddle => {
                Point::new(left + region.width / 2.0, top + region.height)
            }
            HandleAnchor::BottomLeft => Point::new(left, top + region.height),
            HandleAnchor::LeftMiddle => Point::new(left, top + region.height / 2.0),
        }
    }

    /// The horizontal edge dragging this anchor moves, if any.
    pub fn horizontal_edge(self) -> Option<HorizontalEdge> {
        match self {
            HandleAnchor::TopLeft | HandleAnchor::BottomLeft | HandleAnchor::LeftMiddle => {
                Some(HorizontalEdge::Left)
            }
            HandleAnchor::TopRight | HandleAnchor::BottomRight | HandleAnchor::RightMiddle => {
                Some(HorizontalEdge::Right)
            }
            HandleAnchor::TopMiddle | HandleAnchor::BottomMiddle => None,
        }
    }

    /// The vertical edge dragging this anchor moves, if any.
    pub fn vertical_edge(self) -> Option<VerticalEdge> {
        match self {
            HandleAnchor::TopLeft | HandleAnchor::TopRight | HandleAnchor::TopMiddle => {
                Some(VerticalEdge::Top)
            }
            HandleAnchor::BottomLeft | HandleAnchor::BottomRight | HandleAnchor::BottomMiddle => {
                Some(VerticalEdge::Bottom)
            }
            HandleAnchor::LeftMiddle | HandleAnchor::RightMiddle => None,
        }
    }

    /// Whether this anchor sits on a corner rather than an edge midpoint.
    pub fn is_corner(self) -> bool {
        self.horizontal_edge().is_some() && self.vertical_edge().is_some()
    }

    /// Resize cursor for hovering this anchor.
    pub fn cursor(self) -> ResizeCursor {
        match self {
            HandleAnchor::TopLeft | HandleAnchor::BottomRight => ResizeCursor::NwseResize,
            HandleAnchor::TopRight | HandleAnchor::BottomLeft => ResizeCursor::NeswResize,
            HandleAnchor::TopMiddle | HandleAnchor::BottomMiddle => ResizeCursor::NsResize,
            HandleAnchor::LeftMiddle | HandleAnchor::RightMiddle => ResizeCursor::EwResize,
        }
    }
}

/// Placement backend for a single handle.
///
/// The coordinator treats handles as opaque widgets: it pushes positions
/// and visibility in, and reads the current position back when a drag
/// arrives. Hosts bridge this to their toolkit's placement and pointer
/// capture primitives.
pub trait HandleWidget {
    /// Move the handle square's top-left corner.
    fn set_position(&mut self, position: Point);

    /// Current top-left corner of the handle square.
    fn position(&self) -> Point;

    /// Show or hide the handle.
    fn set_visible(&mut self, visible: bool);

    /// Whether the handle is currently shown.
    fn visible(&self) -> bool;

    /// Route all further pointer input to this handle.
    fn capture_pointer(&mut self);

    /// Stop routing pointer input to this handle.
    fn release_pointer(&mut self);
}

/// Plain in-memory handle, for hosts that draw handles themselves and for
/// tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleSprite {
    position: Point,
    visible: bool,
    captured: bool,
}

impl HandleSprite {
    /// Create a hidden sprite at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether pointer input is currently captured.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// The square this handle occupies on the surface.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, Size::new(HANDLE_SIZE, HANDLE_SIZE))
    }
}

impl HandleWidget for HandleSprite {
    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn capture_pointer(&mut self) {
        self.captured = true;
    }

    fn release_pointer(&mut self) {
        self.captured = false;
    }
}
