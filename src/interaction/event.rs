use crate::geometry::CanvasPoint;

/// Pointer input from the host surface. Leave carries no position; the
/// active gesture completes at its last observed point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(CanvasPoint),
    Move(CanvasPoint),
    Up(CanvasPoint),
    Leave,
}

/// Result of a completed gesture, reported to the host exactly once per
/// gesture and never on intermediate pointer moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A draw gesture passed the minimum-size threshold and appended a new
    /// region.
    RegionAdded,
    /// A drag or resize gesture completed (committed even when it moved
    /// nothing).
    RegionsChanged,
}
