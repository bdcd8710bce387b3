//! Label chip layout.
//!
//! The chip sits directly above its region: measured text width plus fixed
//! horizontal padding, fixed height. Text measurement is a trait seam so a
//! host with a real text stack can supply exact advances; the default
//! measurer uses a per-character advance heuristic.

use crate::geometry::PixelRect;

pub const LABEL_FONT_SIZE: f64 = 12.0;
pub const LABEL_HEIGHT: f64 = 20.0;
pub const LABEL_PADDING: f64 = 4.0;

pub trait TextMeasurer {
    /// Advance width of `text` in pixels at the given font size.
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

/// Default measurer: 0.62 × font size per character, the usual advance of a
/// UI sans face. Good enough for chip sizing and label hit zones.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurer;

impl TextMeasurer for HeuristicMeasurer {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * 0.62
    }
}

/// Pixel bounds of the chip for `text` above `region` (canvas space).
pub fn chip_bounds(text: &str, region: PixelRect, measurer: &dyn TextMeasurer) -> PixelRect {
    let text_width = measurer.text_width(text, LABEL_FONT_SIZE);
    PixelRect::new(
        region.x,
        region.y - LABEL_HEIGHT,
        text_width + 2.0 * LABEL_PADDING,
        LABEL_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_measurer_scales_with_char_count_and_font_size() {
        let measurer = HeuristicMeasurer;
        assert_eq!(measurer.text_width("", 12.0), 0.0);
        let four = measurer.text_width("abcd", 12.0);
        let eight = measurer.text_width("abcdefgh", 12.0);
        assert!((eight - 2.0 * four).abs() < 1e-9);
        assert!(measurer.text_width("abcd", 24.0) > four);
    }

    #[test]
    fn chip_bounds_pad_text_and_sit_flush_above_the_region() {
        let region = PixelRect::new(100.0, 80.0, 50.0, 40.0);
        let chip = chip_bounds("Tap", region, &HeuristicMeasurer);
        assert_eq!(chip.x, 100.0);
        assert_eq!(chip.y, 80.0 - LABEL_HEIGHT);
        assert_eq!(chip.height, LABEL_HEIGHT);
        let expected_width = HeuristicMeasurer.text_width("Tap", LABEL_FONT_SIZE) + 2.0 * LABEL_PADDING;
        assert!((chip.width - expected_width).abs() < 1e-9);
    }
}
