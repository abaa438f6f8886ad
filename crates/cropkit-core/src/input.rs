//! Pointer events delivered to individual handles.

use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Pointer event routed to a single handle.
///
/// Drag deltas are incremental: movement since the previous `Dragged`
/// event on the same handle, not since the press. Consumers that need a
/// cumulative value accumulate it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HandleEvent {
    /// Primary button went down on the handle.
    Pressed,
    /// Pointer moved while the handle is engaged.
    Dragged(Vec2),
    /// Primary button was released.
    Released,
}

/// Capture phase of a single handle.
///
/// Press moves the handle to `Capturing`, release back to `Idle`; there is
/// no nested or concurrent capture on one handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// Waiting for a press.
    #[default]
    Idle,
    /// Pointer input is routed to the handle until release.
    Capturing,
}

impl DragPhase {
    /// Check if pointer input is currently captured.
    pub fn is_capturing(self) -> bool {
        matches!(self, Self::Capturing)
    }
}
