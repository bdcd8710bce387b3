use crate::geometry::CanvasPoint;
use crate::hit::ResizeHandle;

/// Transient gesture state. Mode flags (drag mode, drawing enabled) are
/// host-owned inputs layered over these states, never folded into them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    Drawing {
        anchor: CanvasPoint,
        current: CanvasPoint,
    },
    Dragging {
        index: usize,
        last: CanvasPoint,
    },
    Resizing {
        index: usize,
        handle: ResizeHandle,
        last: CanvasPoint,
    },
}

impl InteractionState {
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Index of the region under manipulation, if any.
    pub const fn active_index(&self) -> Option<usize> {
        match self {
            Self::Dragging { index, .. } | Self::Resizing { index, .. } => Some(*index),
            Self::Idle | Self::Drawing { .. } => None,
        }
    }
}

/// Hover feedback for the host's pointer, recomputed while idle in drag
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    /// Over a region body: the region can be dragged.
    Move,
    /// Diagonal resize, north-west/south-east axis.
    ResizeNwse,
    /// Diagonal resize, north-east/south-west axis.
    ResizeNesw,
    /// Horizontal resize.
    ResizeEw,
    /// Vertical resize.
    ResizeNs,
}

impl CursorStyle {
    pub const fn for_handle(handle: ResizeHandle) -> Self {
        match handle {
            ResizeHandle::TopLeft | ResizeHandle::BottomRight => Self::ResizeNwse,
            ResizeHandle::TopRight | ResizeHandle::BottomLeft => Self::ResizeNesw,
            ResizeHandle::Left | ResizeHandle::Right => Self::ResizeEw,
            ResizeHandle::Top | ResizeHandle::Bottom => Self::ResizeNs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_index_is_exposed_only_while_manipulating() {
        assert_eq!(InteractionState::Idle.active_index(), None);
        let drawing = InteractionState::Drawing {
            anchor: CanvasPoint::new(0.0, 0.0),
            current: CanvasPoint::new(5.0, 5.0),
        };
        assert_eq!(drawing.active_index(), None);
        let dragging = InteractionState::Dragging {
            index: 3,
            last: CanvasPoint::new(1.0, 1.0),
        };
        assert_eq!(dragging.active_index(), Some(3));
        let resizing = InteractionState::Resizing {
            index: 7,
            handle: ResizeHandle::Top,
            last: CanvasPoint::new(1.0, 1.0),
        };
        assert_eq!(resizing.active_index(), Some(7));
    }

    #[test]
    fn cursor_styles_pair_opposite_handles() {
        assert_eq!(
            CursorStyle::for_handle(ResizeHandle::TopLeft),
            CursorStyle::for_handle(ResizeHandle::BottomRight)
        );
        assert_eq!(
            CursorStyle::for_handle(ResizeHandle::TopRight),
            CursorStyle::for_handle(ResizeHandle::BottomLeft)
        );
        assert_eq!(CursorStyle::for_handle(ResizeHandle::Left), CursorStyle::ResizeEw);
        assert_eq!(CursorStyle::for_handle(ResizeHandle::Bottom), CursorStyle::ResizeNs);
    }
}
