//! Conversion between canvas pixel rectangles and the percentage rectangles
//! used as the resolution-independent storage format.
//!
//! Both directions are pure multiplications and form an exact round-trip
//! pair for any image size with positive dimensions. A zero-sized image
//! dimension is the host's responsibility to avoid; no error is raised here.

use crate::geometry::{ImageSize, PercentRect, PixelRect};

pub fn to_percentages(rect: PixelRect, image: ImageSize) -> PercentRect {
    PercentRect::new(
        rect.x / image.width * 100.0,
        rect.y / image.height * 100.0,
        rect.width / image.width * 100.0,
        rect.height / image.height * 100.0,
    )
}

pub fn to_pixels(rect: PercentRect, image: ImageSize) -> PixelRect {
    PixelRect::new(
        rect.start_x / 100.0 * image.width,
        rect.start_y / 100.0 * image.height,
        rect.width / 100.0 * image.width,
        rect.height / 100.0 * image.height,
    )
}

/// Converts a pixel-space delta to percentage units along each axis.
pub fn delta_to_percentages(dx: f64, dy: f64, image: ImageSize) -> (f64, f64) {
    (dx / image.width * 100.0, dy / image.height * 100.0)
}
