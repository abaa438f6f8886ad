//! Handle widget system for crop-region manipulation.
//!
//! This module provides the pieces around the crop rectangle:
//! - Anchor definitions with their perimeter positions and edge mappings
//! - The placement backend trait hosts implement per handle
//! - The coordinator that maps handle drags onto region geometry
//!
//! The region stays pure data. The coordinator wraps it with interaction
//! state.

mod coordinator;
mod handles;
mod resize;

pub use coordinator::HandleCoordinator;
pub use handles::{
    HANDLE_SIZE, HandleAnchor, HandleSprite, HandleWidget, HorizontalEdge, ResizeCursor,
    VerticalEdge,
};
pub use resize::{
    RegionChange, drag_bottom_edge, drag_left_edge, drag_right_edge, drag_top_edge,
};
