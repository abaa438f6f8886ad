//! Cropkit Core Library
//!
//! Platform-agnostic geometry and interaction logic for resizing a
//! rectangular crop region with eight draggable perimeter handles.

pub mod input;
pub mod region;
pub mod widget;

pub use input::{DragPhase, HandleEvent};
pub use region::CropRegion;
pub use widget::{
    HANDLE_SIZE, HandleAnchor, HandleCoordinator, HandleSprite, HandleWidget, RegionChange,
    ResizeCursor,
};
