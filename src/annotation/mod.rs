//! The persisted annotation unit and the host-supplied event-type
//! descriptor.
//!
//! `EventRegion` geometry is stored in percentages of the image dimensions
//! so saved annotations are independent of the rendered viewport size. The
//! serialized field names match the host's JSON wire shape.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::geometry::{Color, ImageSize, PercentRect, PixelRect};
use crate::{coords, label};

/// Label text the host stores for regions saved without an action label.
/// Regions carrying it render without a chip.
pub const NO_LABEL: &str = "No label";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegion {
    /// Stable identifier assigned by the host's persistence layer; absent
    /// for a freshly drawn, unsaved region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub start_x: f64,
    pub start_y: f64,
    pub width: f64,
    pub height: f64,
    /// Opaque event-type tag selecting a palette color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Display string rendered in the label chip above the region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_action: Option<String>,
}

impl EventRegion {
    pub fn new(rect: PercentRect, event_type: Option<String>) -> Self {
        Self {
            id: None,
            start_x: rect.start_x,
            start_y: rect.start_y,
            width: rect.width,
            height: rect.height,
            event_type,
            event_action: None,
        }
    }

    pub const fn rect(&self) -> PercentRect {
        PercentRect::new(self.start_x, self.start_y, self.width, self.height)
    }

    pub fn set_rect(&mut self, rect: PercentRect) {
        self.start_x = rect.start_x;
        self.start_y = rect.start_y;
        self.width = rect.width;
        self.height = rect.height;
    }

    pub fn to_pixels(&self, image: ImageSize) -> PixelRect {
        coords::to_pixels(self.rect(), image)
    }

    /// Label text for the chip, or `None` when the region carries no label
    /// or the no-label sentinel.
    pub fn label_text(&self) -> Option<&str> {
        self.event_action
            .as_deref()
            .filter(|text| !text.is_empty() && *text != NO_LABEL)
    }

    /// Pixel bounds of the label chip above the region, when it has one.
    pub fn label_bounds(
        &self,
        image: ImageSize,
        measurer: &dyn label::TextMeasurer,
    ) -> Option<PixelRect> {
        self.label_text()
            .map(|text| label::chip_bounds(text, self.to_pixels(image), measurer))
    }
}

/// Parses the host's JSON region list (the `initialRectangles` payload).
pub fn regions_from_json(payload: &str) -> CoreResult<Vec<EventRegion>> {
    Ok(serde_json::from_str(payload)?)
}

/// Serializes a region list back into the host's JSON wire shape.
pub fn regions_to_json(regions: &[EventRegion]) -> CoreResult<String> {
    Ok(serde_json::to_string(regions)?)
}

/// Host-supplied event-type descriptor: an id, a display name, and the
/// color regions of this type render with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventType {
    pub id: String,
    pub name: String,
    pub color: Color,
}

impl EventType {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::HeuristicMeasurer;

    fn region(start_x: f64, start_y: f64, width: f64, height: f64) -> EventRegion {
        EventRegion::new(PercentRect::new(start_x, start_y, width, height), None)
    }

    #[test]
    fn region_serializes_with_camel_case_wire_names() {
        let mut subject = region(12.5, 16.0, 25.0, 10.0);
        subject.id = Some("rect1".to_string());
        subject.event_type = Some("click".to_string());
        subject.event_action = Some("Add to cart".to_string());

        let json = serde_json::to_value(&subject).expect("region should serialize");
        assert_eq!(json["id"], "rect1");
        assert_eq!(json["startX"], 12.5);
        assert_eq!(json["startY"], 16.0);
        assert_eq!(json["eventType"], "click");
        assert_eq!(json["eventAction"], "Add to cart");
    }

    #[test]
    fn region_deserializes_without_optional_fields() {
        let subject: EventRegion =
            serde_json::from_str(r#"{"startX":1.0,"startY":2.0,"width":3.0,"height":4.0}"#)
                .expect("minimal region payload should parse");
        assert_eq!(subject.id, None);
        assert_eq!(subject.event_type, None);
        assert_eq!(subject.rect(), PercentRect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn region_list_round_trips_through_the_wire_shape() {
        let mut saved = region(12.5, 16.0, 25.0, 10.0);
        saved.id = Some("rect1".to_string());
        saved.event_action = Some("Add to cart".to_string());
        let regions = vec![saved, region(0.0, 0.0, 5.0, 5.0)];

        let payload = regions_to_json(&regions).expect("region list should serialize");
        let parsed = regions_from_json(&payload).expect("serialized list should parse back");
        assert_eq!(parsed, regions);

        let err = regions_from_json("{not json").expect_err("malformed payload should fail");
        assert!(matches!(err, crate::error::CoreError::ParseRegions(_)));
    }

    #[test]
    fn label_text_filters_sentinel_and_empty_labels() {
        let mut subject = region(0.0, 0.0, 10.0, 10.0);
        assert_eq!(subject.label_text(), None);

        subject.event_action = Some(NO_LABEL.to_string());
        assert_eq!(subject.label_text(), None);

        subject.event_action = Some(String::new());
        assert_eq!(subject.label_text(), None);

        subject.event_action = Some("Open menu".to_string());
        assert_eq!(subject.label_text(), Some("Open menu"));
    }

    #[test]
    fn label_bounds_sit_directly_above_the_region() {
        let mut subject = region(10.0, 50.0, 20.0, 10.0);
        subject.event_action = Some("Tap".to_string());

        let image = ImageSize::new(1000.0, 1000.0);
        let bounds = subject
            .label_bounds(image, &HeuristicMeasurer)
            .expect("labeled region should have chip bounds");
        let pixels = subject.to_pixels(image);
        assert_eq!(bounds.x, pixels.x);
        assert_eq!(bounds.bottom(), pixels.y);
        assert!(bounds.width > 0.0);
    }
}
