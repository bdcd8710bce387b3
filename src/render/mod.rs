//! Pure projection of the current annotation state into draw commands.
//!
//! The host replays the command list onto its own 2D surface. Rendering
//! owns no interaction logic and is safe to call on every state change:
//! the same scene always produces the same commands.

use crate::annotation::EventRegion;
use crate::geometry::{CanvasPoint, Color, ImageSize, PixelRect};
use crate::hit::{handle_anchor, ResizeHandle, HANDLE_SIZE};
use crate::label::{self, TextMeasurer, LABEL_FONT_SIZE, LABEL_HEIGHT, LABEL_PADDING};
use crate::theme::{self, EventPalette};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: PixelRect,
        color: Color,
        opacity: f64,
    },
    StrokeRect {
        rect: PixelRect,
        color: Color,
        line_width: f64,
    },
    FillText {
        text: String,
        origin: CanvasPoint,
        color: Color,
        font_size: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub default_region_color: Color,
    pub highlight_color: Color,
    pub fill_opacity: f64,
    pub stroke_width: f64,
    pub handle_fill: Color,
    pub handle_stroke: Color,
    pub label_text_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            default_region_color: theme::DEFAULT_REGION_COLOR,
            highlight_color: theme::HIGHLIGHT_COLOR,
            fill_opacity: 0.2,
            stroke_width: 2.0,
            handle_fill: theme::HANDLE_FILL,
            handle_stroke: theme::HANDLE_STROKE,
            label_text_color: theme::LABEL_TEXT_COLOR,
        }
    }
}

/// The in-progress drawing preview, colored by the selected event type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InProgress {
    pub rect: PixelRect,
    pub color: Color,
}

/// Everything the renderer projects: the committed regions, the viewport,
/// the selection, the mode, and the drawing preview.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub regions: &'a [EventRegion],
    pub image: ImageSize,
    pub palette: &'a EventPalette,
    pub selected: Option<usize>,
    pub drag_mode: bool,
    pub in_progress: Option<InProgress>,
}

pub fn render(
    scene: &Scene<'_>,
    measurer: &dyn TextMeasurer,
    style: &RenderStyle,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    for (index, region) in scene.regions.iter().enumerate() {
        let rect = region.to_pixels(scene.image);
        let selected = scene.selected == Some(index);
        let color = if selected {
            style.highlight_color
        } else {
            scene.palette.color_for(region.event_type.as_deref())
        };

        commands.push(DrawCommand::FillRect {
            rect,
            color,
            opacity: style.fill_opacity,
        });
        commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            line_width: style.stroke_width,
        });

        if let Some(text) = region.label_text() {
            let chip = label::chip_bounds(text, rect, measurer);
            commands.push(DrawCommand::FillRect {
                rect: chip,
                color,
                opacity: 1.0,
            });
            commands.push(DrawCommand::FillText {
                text: text.to_string(),
                origin: CanvasPoint::new(
                    chip.x + LABEL_PADDING,
                    chip.y + (LABEL_HEIGHT - LABEL_FONT_SIZE) / 2.0,
                ),
                color: style.label_text_color,
                font_size: LABEL_FONT_SIZE,
            });
        }
    }

    if scene.drag_mode {
        if let Some(rect) = scene
            .selected
            .and_then(|index| scene.regions.get(index))
            .map(|region| region.to_pixels(scene.image))
        {
            commands.extend(handle_commands(rect, style));
        }
    }

    if let Some(preview) = scene.in_progress {
        commands.push(DrawCommand::FillRect {
            rect: preview.rect,
            color: preview.color,
            opacity: style.fill_opacity,
        });
        commands.push(DrawCommand::StrokeRect {
            rect: preview.rect,
            color: preview.color,
            line_width: style.stroke_width,
        });
    }

    commands
}

/// Eight fixed-size squares at the corners and edge midpoints.
fn handle_commands(rect: PixelRect, style: &RenderStyle) -> Vec<DrawCommand> {
    ResizeHandle::ALL
        .iter()
        .flat_map(|&handle| {
            let anchor = handle_anchor(rect, handle);
            let square = PixelRect::new(
                anchor.x - HANDLE_SIZE / 2.0,
                anchor.y - HANDLE_SIZE / 2.0,
                HANDLE_SIZE,
                HANDLE_SIZE,
            );
            [
                DrawCommand::FillRect {
                    rect: square,
                    color: style.handle_fill,
                    opacity: 1.0,
                },
                DrawCommand::StrokeRect {
                    rect: square,
                    color: style.handle_stroke,
                    line_width: 1.0,
                },
            ]
        })
        .collect()
}
