use super::{CursorStyle, GestureOutcome, InteractionState};
use crate::annotation::{EventRegion, EventType};
use crate::coords;
use crate::geometry::{CanvasPoint, ImageSize, PercentRect, PixelRect};
use crate::hit::{self, ResizeHandle};
use crate::label::TextMeasurer;

/// Minimum committed extent of a drawn region, in percent of the image
/// dimension. Drags at or below this on either axis are accidental clicks
/// and are discarded.
pub const MIN_REGION_EXTENT_PCT: f64 = 0.5;

/// Host-owned mode toggles, passed into every transition. Drag mode and
/// drawing mode are mutually exclusive at the host level; this machine
/// simply reads whichever is set.
#[derive(Debug, Clone, Copy)]
pub struct Modes<'a> {
    pub drag_mode: bool,
    pub drawing_enabled: bool,
    pub selected_event_type: Option<&'a EventType>,
}

impl<'a> Modes<'a> {
    fn can_draw(&self) -> bool {
        !self.drag_mode && self.drawing_enabled && self.selected_event_type.is_some()
    }
}

/// Pointer-driven gesture machine. Owns the transient interaction state;
/// the region list itself stays with the caller and is mutated in place
/// during drag and resize gestures.
#[derive(Debug)]
pub struct InteractionController {
    state: InteractionState,
    cursor: CursorStyle,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            state: InteractionState::Idle,
            cursor: CursorStyle::Default,
        }
    }

    pub const fn state(&self) -> InteractionState {
        self.state
    }

    pub const fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub const fn active_index(&self) -> Option<usize> {
        self.state.active_index()
    }

    /// The rectangle being drawn right now, in canvas pixels.
    pub fn in_progress_rect(&self) -> Option<PixelRect> {
        match self.state {
            InteractionState::Drawing { anchor, current } => {
                Some(PixelRect::from_corners(anchor, current))
            }
            _ => None,
        }
    }

    pub fn pointer_down(
        &mut self,
        point: CanvasPoint,
        regions: &[EventRegion],
        modes: Modes<'_>,
        image: ImageSize,
    ) {
        if !self.state.is_idle() {
            return;
        }

        if modes.drag_mode {
            if let Some((index, handle)) = hit::first_handle_hit(point, regions, image) {
                tracing::debug!(index, ?handle, "begin resize gesture");
                self.state = InteractionState::Resizing {
                    index,
                    handle,
                    last: point,
                };
            } else if let Some(index) = hit::first_body_hit(point, regions, image) {
                tracing::debug!(index, "begin drag gesture");
                self.state = InteractionState::Dragging { index, last: point };
            }
            return;
        }

        if modes.can_draw() {
            tracing::debug!(x = point.x, y = point.y, "begin draw gesture");
            self.state = InteractionState::Drawing {
                anchor: point,
                current: point,
            };
        }
    }

    pub fn pointer_move(
        &mut self,
        point: CanvasPoint,
        regions: &mut [EventRegion],
        modes: Modes<'_>,
        image: ImageSize,
    ) {
        match self.state {
            InteractionState::Idle => {
                self.cursor = if modes.drag_mode {
                    hover_cursor(point, regions, image)
                } else {
                    CursorStyle::Default
                };
            }
            InteractionState::Drawing { anchor, .. } => {
                self.state = InteractionState::Drawing {
                    anchor,
                    current: point,
                };
            }
            InteractionState::Dragging { index, last } => {
                let (dx, dy) = coords::delta_to_percentages(point.x - last.x, point.y - last.y, image);
                if let Some(region) = regions.get_mut(index) {
                    region.start_x += dx;
                    region.start_y += dy;
                }
                self.state = InteractionState::Dragging { index, last: point };
            }
            InteractionState::Resizing { index, handle, last } => {
                let (dx, dy) = coords::delta_to_percentages(point.x - last.x, point.y - last.y, image);
                if let Some(region) = regions.get_mut(index) {
                    let resized = apply_handle_delta(region.rect(), handle, dx, dy).normalized();
                    region.set_rect(resized);
                }
                self.state = InteractionState::Resizing {
                    index,
                    handle,
                    last: point,
                };
            }
        }
    }

    pub fn pointer_up(
        &mut self,
        point: CanvasPoint,
        regions: &mut Vec<EventRegion>,
        modes: Modes<'_>,
        image: ImageSize,
    ) -> Option<GestureOutcome> {
        let finished = std::mem::replace(&mut self.state, InteractionState::Idle);
        match finished {
            InteractionState::Idle => None,
            InteractionState::Drawing { anchor, .. } => {
                let rect = coords::to_percentages(PixelRect::from_corners(anchor, point), image);
                if rect.width <= MIN_REGION_EXTENT_PCT || rect.height <= MIN_REGION_EXTENT_PCT {
                    tracing::debug!(
                        width = rect.width,
                        height = rect.height,
                        "draw below minimum extent discarded"
                    );
                    return None;
                }
                let event_type = modes
                    .selected_event_type
                    .map(|selected| selected.id.clone());
                regions.push(EventRegion::new(rect, event_type));
                tracing::debug!(count = regions.len(), "draw gesture committed");
                Some(GestureOutcome::RegionAdded)
            }
            InteractionState::Dragging { index, .. } => {
                tracing::debug!(index, "drag gesture committed");
                Some(GestureOutcome::RegionsChanged)
            }
            InteractionState::Resizing { index, handle, .. } => {
                tracing::debug!(index, ?handle, "resize gesture committed");
                Some(GestureOutcome::RegionsChanged)
            }
        }
    }

    /// Treated identically to pointer-up at the gesture's last observed
    /// position, so leaving the surface mid-drag never leaves a stuck
    /// state.
    pub fn pointer_leave(
        &mut self,
        regions: &mut Vec<EventRegion>,
        modes: Modes<'_>,
        image: ImageSize,
    ) -> Option<GestureOutcome> {
        self.cursor = CursorStyle::Default;
        let point = match self.state {
            InteractionState::Idle => return None,
            InteractionState::Drawing { current, .. } => current,
            InteractionState::Dragging { last, .. } | InteractionState::Resizing { last, .. } => {
                last
            }
        };
        self.pointer_up(point, regions, modes, image)
    }
}

fn hover_cursor(point: CanvasPoint, regions: &[EventRegion], image: ImageSize) -> CursorStyle {
    if let Some((_, handle)) = hit::first_handle_hit(point, regions, image) {
        CursorStyle::for_handle(handle)
    } else if hit::first_body_hit(point, regions, image).is_some() {
        CursorStyle::Move
    } else {
        CursorStyle::Default
    }
}

/// Applies a pointer delta (percent units) to the edges selected by the
/// handle. Extents are left unnormalized; the caller sign-corrects.
fn apply_handle_delta(rect: PercentRect, handle: ResizeHandle, dx: f64, dy: f64) -> PercentRect {
    let mut next = rect;
    match handle {
        ResizeHandle::TopLeft => {
            next.start_x += dx;
            next.start_y += dy;
            next.width -= dx;
            next.height -= dy;
        }
        ResizeHandle::TopRight => {
            next.start_y += dy;
            next.width += dx;
            next.height -= dy;
        }
        ResizeHandle::BottomLeft => {
            next.start_x += dx;
            next.width -= dx;
            next.height += dy;
        }
        ResizeHandle::BottomRight => {
            next.width += dx;
            next.height += dy;
        }
        ResizeHandle::Top => {
            next.start_y += dy;
            next.height -= dy;
        }
        ResizeHandle::Bottom => {
            next.height += dy;
        }
        ResizeHandle::Left => {
            next.start_x += dx;
            next.width -= dx;
        }
        ResizeHandle::Right => {
            next.width += dx;
        }
    }
    next
}

/// Resolves a non-drag-mode click to the id of the first region (in list
/// order) whose body or label chip contains the point and whose id is
/// defined. Unsaved regions never match.
pub fn click_target<'a>(
    point: CanvasPoint,
    regions: &'a [EventRegion],
    image: ImageSize,
    measurer: &dyn TextMeasurer,
) -> Option<&'a str> {
    regions.iter().find_map(|region| {
        let id = region.id.as_deref()?;
        let body = hit::is_point_in_rect(point, region.to_pixels(image));
        let chip = region
            .label_bounds(image, measurer)
            .is_some_and(|bounds| hit::is_point_in_rect(point, bounds));
        (body || chip).then_some(id)
    })
}
