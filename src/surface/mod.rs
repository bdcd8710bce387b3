//! Host-facing façade: wires pointer events to the interaction machine,
//! keeps the region list, and reports finalized lists and clicks back to
//! the host through registered callbacks.
//!
//! Callbacks fire on gesture completion only (a completed draw past the
//! minimum threshold, or a completed drag/resize), never on intermediate
//! pointer moves. The host owns region deletion and persistence: after
//! saving, it re-syncs the surface with `set_regions` and the list passed
//! back becomes the new source of truth.

use crate::annotation::{EventRegion, EventType};
use crate::config;
use crate::geometry::{CanvasPoint, ImageSize};
use crate::interaction::{
    click_target, CursorStyle, GestureOutcome, InteractionController, Modes, PointerEvent,
};
use crate::label::{HeuristicMeasurer, TextMeasurer};
use crate::render::{self, DrawCommand, InProgress, RenderStyle, Scene};
use crate::theme::EventPalette;

type RegionsCallback = Box<dyn FnMut(&[EventRegion])>;
type DrawCompleteCallback = Box<dyn FnMut()>;
type RegionClickCallback = Box<dyn FnMut(&str)>;

pub struct AnnotationSurface {
    image: ImageSize,
    drag_mode: bool,
    drawing_enabled: bool,
    selected_event_type: Option<EventType>,
    regions: Vec<EventRegion>,
    selected_region: Option<usize>,
    controller: InteractionController,
    palette: EventPalette,
    style: RenderStyle,
    measurer: Box<dyn TextMeasurer>,
    on_regions_change: Option<RegionsCallback>,
    on_draw_complete: Option<DrawCompleteCallback>,
    on_region_click: Option<RegionClickCallback>,
}

impl AnnotationSurface {
    pub fn new(image: ImageSize) -> Self {
        let style = config::load_surface_config().resolve_style();
        Self {
            image,
            drag_mode: false,
            drawing_enabled: false,
            selected_event_type: None,
            regions: Vec::new(),
            selected_region: None,
            controller: InteractionController::new(),
            palette: EventPalette::new(style.default_region_color),
            style,
            measurer: Box::new(HeuristicMeasurer),
            on_regions_change: None,
            on_draw_complete: None,
            on_region_click: None,
        }
    }

    /// Updates the rendering viewport when the host remeasures its image.
    /// Stored percentages are untouched; only rendering re-normalizes.
    pub fn set_image_size(&mut self, image: ImageSize) {
        self.image = image;
    }

    pub fn set_drag_mode(&mut self, drag_mode: bool) {
        self.drag_mode = drag_mode;
    }

    pub fn set_drawing_enabled(&mut self, drawing_enabled: bool) {
        self.drawing_enabled = drawing_enabled;
    }

    pub fn set_selected_event_type(&mut self, event_type: Option<EventType>) {
        self.selected_event_type = event_type;
    }

    /// Registers the event types whose colors regions render with.
    pub fn set_event_types(&mut self, types: &[EventType]) {
        self.palette = EventPalette::from_event_types(types, self.style.default_region_color);
    }

    /// Re-syncs the region list from the host (e.g. after persistence or
    /// deletion). The incoming list becomes the source of truth.
    pub fn set_regions(&mut self, regions: Vec<EventRegion>) {
        self.regions = regions;
        if self
            .selected_region
            .is_some_and(|index| index >= self.regions.len())
        {
            self.selected_region = None;
        }
    }

    /// Host-driven selection highlight (also enables resize handles while
    /// in drag mode).
    pub fn set_selected_region(&mut self, index: Option<usize>) {
        self.selected_region = index.filter(|index| *index < self.regions.len());
    }

    /// Replaces the default heuristic text measurer with a host-supplied
    /// one backed by its real text stack.
    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
    }

    pub fn on_regions_change(&mut self, callback: impl FnMut(&[EventRegion]) + 'static) {
        self.on_regions_change = Some(Box::new(callback));
    }

    pub fn on_draw_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_draw_complete = Some(Box::new(callback));
    }

    pub fn on_region_click(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_region_click = Some(Box::new(callback));
    }

    pub fn regions(&self) -> &[EventRegion] {
        &self.regions
    }

    pub fn cursor(&self) -> CursorStyle {
        self.controller.cursor()
    }

    /// Feeds one pointer event through the interaction machine and fires
    /// the completion callbacks it produces.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let modes = Modes {
            drag_mode: self.drag_mode,
            drawing_enabled: self.drawing_enabled,
            selected_event_type: self.selected_event_type.as_ref(),
        };
        let outcome = match event {
            PointerEvent::Down(point) => {
                self.controller
                    .pointer_down(point, &self.regions, modes, self.image);
                None
            }
            PointerEvent::Move(point) => {
                self.controller
                    .pointer_move(point, &mut self.regions, modes, self.image);
                None
            }
            PointerEvent::Up(point) => {
                self.controller
                    .pointer_up(point, &mut self.regions, modes, self.image)
            }
            PointerEvent::Leave => {
                self.controller
                    .pointer_leave(&mut self.regions, modes, self.image)
            }
        };

        match outcome {
            Some(GestureOutcome::RegionAdded) => {
                self.notify_regions_changed();
                if let Some(callback) = self.on_draw_complete.as_mut() {
                    callback();
                }
            }
            Some(GestureOutcome::RegionsChanged) => self.notify_regions_changed(),
            None => {}
        }
    }

    /// Routes a click to the first saved region under it. Active only
    /// outside drag mode; drag-mode presses go through `handle_pointer`.
    pub fn handle_click(&mut self, point: CanvasPoint) {
        if self.drag_mode {
            return;
        }
        let Some(id) = click_target(point, &self.regions, self.image, self.measurer.as_ref())
        else {
            return;
        };
        tracing::debug!(id, "region clicked");
        if let Some(callback) = self.on_region_click.as_mut() {
            callback(id);
        }
    }

    /// Projects the current state into draw commands for the host surface.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let in_progress = self.controller.in_progress_rect().map(|rect| InProgress {
            rect,
            color: self
                .selected_event_type
                .as_ref()
                .map(|event_type| event_type.color)
                .unwrap_or_else(|| self.palette.default_color()),
        });
        let scene = Scene {
            regions: &self.regions,
            image: self.image,
            palette: &self.palette,
            selected: self.controller.active_index().or(self.selected_region),
            drag_mode: self.drag_mode,
            in_progress,
        };
        render::render(&scene, self.measurer.as_ref(), &self.style)
    }

    fn notify_regions_changed(&mut self) {
        if let Some(callback) = self.on_regions_change.as_mut() {
            callback(&self.regions);
        }
    }
}
