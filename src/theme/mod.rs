//! Region colors: hex parsing and the event-type palette.

use std::collections::HashMap;

use thiserror::Error;

use crate::annotation::EventType;
use crate::geometry::Color;

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid hex color: {value:?}")]
    InvalidHexColor { value: String },
}

/// Fallback color for regions whose event type is unknown or unset.
pub const DEFAULT_REGION_COLOR: Color = Color::new(59, 130, 246);

/// Stroke/fill override for the selected region.
pub const HIGHLIGHT_COLOR: Color = Color::new(239, 68, 68);

/// Handle fill and stroke.
pub const HANDLE_FILL: Color = Color::new(255, 255, 255);
pub const HANDLE_STROKE: Color = Color::new(31, 41, 55);

/// Label chip text color.
pub const LABEL_TEXT_COLOR: Color = Color::new(255, 255, 255);

/// Parses a `#rrggbb` color string.
pub fn parse_hex_color(value: &str) -> ThemeResult<Color> {
    let digits = value.strip_prefix('#').ok_or_else(|| ThemeError::InvalidHexColor {
        value: value.to_string(),
    })?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ThemeError::InvalidHexColor {
            value: value.to_string(),
        });
    }
    let component = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ThemeError::InvalidHexColor {
            value: value.to_string(),
        })
    };
    Ok(Color::new(component(0..2)?, component(2..4)?, component(4..6)?))
}

/// Maps event-type ids to their colors, with a default for everything else.
#[derive(Debug, Clone)]
pub struct EventPalette {
    entries: HashMap<String, Color>,
    default: Color,
}

impl Default for EventPalette {
    fn default() -> Self {
        Self::new(DEFAULT_REGION_COLOR)
    }
}

impl EventPalette {
    pub fn new(default: Color) -> Self {
        Self {
            entries: HashMap::new(),
            default,
        }
    }

    pub fn from_event_types(types: &[EventType], default: Color) -> Self {
        let mut palette = Self::new(default);
        for event_type in types {
            palette.entries.insert(event_type.id.clone(), event_type.color);
        }
        palette
    }

    pub fn color_for(&self, event_type: Option<&str>) -> Color {
        event_type
            .and_then(|id| self.entries.get(id).copied())
            .unwrap_or(self.default)
    }

    pub const fn default_color(&self) -> Color {
        self.default
    }
}
