//! Hit-testing for region bodies and the eight resize handles.
//!
//! Handle hit zones are Chebyshev boxes of `HANDLE_SIZE` around the handle
//! coordinate. Corner handles are tested before edge handles so a point
//! near a corner always resolves to the corner, and edge zones require the
//! along-edge coordinate to lie strictly between the rectangle's opposite
//! bounds. When regions overlap, the first match in list order wins.

use crate::annotation::EventRegion;
use crate::geometry::{CanvasPoint, ImageSize, PixelRect};

/// Half-extent of a handle's hit zone, in pixels.
pub const HANDLE_SIZE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

impl ResizeHandle {
    /// Corner handles in hit-test precedence order.
    pub const CORNERS: [ResizeHandle; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Edge handles in hit-test order, tested only after every corner missed.
    pub const EDGES: [ResizeHandle; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// All eight handles in render order: corners, then edge midpoints.
    pub const ALL: [ResizeHandle; 8] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
    ];

    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }
}

/// Anchor coordinate of a handle: the corner point, or the edge midpoint.
pub fn handle_anchor(rect: PixelRect, handle: ResizeHandle) -> CanvasPoint {
    let mid_x = rect.x + rect.width / 2.0;
    let mid_y = rect.y + rect.height / 2.0;
    match handle {
        ResizeHandle::TopLeft => CanvasPoint::new(rect.x, rect.y),
        ResizeHandle::TopRight => CanvasPoint::new(rect.right(), rect.y),
        ResizeHandle::BottomLeft => CanvasPoint::new(rect.x, rect.bottom()),
        ResizeHandle::BottomRight => CanvasPoint::new(rect.right(), rect.bottom()),
        ResizeHandle::Top => CanvasPoint::new(mid_x, rect.y),
        ResizeHandle::Bottom => CanvasPoint::new(mid_x, rect.bottom()),
        ResizeHandle::Left => CanvasPoint::new(rect.x, mid_y),
        ResizeHandle::Right => CanvasPoint::new(rect.right(), mid_y),
    }
}

/// Axis-aligned containment, inclusive of the boundary.
pub fn is_point_in_rect(point: CanvasPoint, rect: PixelRect) -> bool {
    point.x >= rect.x && point.x <= rect.right() && point.y >= rect.y && point.y <= rect.bottom()
}

fn near(a: f64, b: f64) -> bool {
    (a - b).abs() <= HANDLE_SIZE
}

/// Resolves the handle under `point` for one rectangle, or `None`.
pub fn resize_handle_at_point(point: CanvasPoint, rect: PixelRect) -> Option<ResizeHandle> {
    for handle in ResizeHandle::CORNERS {
        let anchor = handle_anchor(rect, handle);
        if near(point.x, anchor.x) && near(point.y, anchor.y) {
            return Some(handle);
        }
    }

    let within_x = point.x > rect.x && point.x < rect.right();
    let within_y = point.y > rect.y && point.y < rect.bottom();
    for handle in ResizeHandle::EDGES {
        let hit = match handle {
            ResizeHandle::Left => near(point.x, rect.x) && within_y,
            ResizeHandle::Right => near(point.x, rect.right()) && within_y,
            ResizeHandle::Top => near(point.y, rect.y) && within_x,
            ResizeHandle::Bottom => near(point.y, rect.bottom()) && within_x,
            _ => false,
        };
        if hit {
            return Some(handle);
        }
    }
    None
}

/// First region in list order with a handle under `point`.
pub fn first_handle_hit(
    point: CanvasPoint,
    regions: &[EventRegion],
    image: ImageSize,
) -> Option<(usize, ResizeHandle)> {
    regions.iter().enumerate().find_map(|(index, region)| {
        resize_handle_at_point(point, region.to_pixels(image)).map(|handle| (index, handle))
    })
}

/// First region in list order whose body contains `point`.
pub fn first_body_hit(
    point: CanvasPoint,
    regions: &[EventRegion],
    image: ImageSize,
) -> Option<usize> {
    regions
        .iter()
        .position(|region| is_point_in_rect(point, region.to_pixels(image)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PercentRect;

    fn rect() -> PixelRect {
        PixelRect::new(100.0, 100.0, 200.0, 100.0)
    }

    #[test]
    fn body_containment_includes_the_boundary() {
        assert!(is_point_in_rect(CanvasPoint::new(100.0, 100.0), rect()));
        assert!(is_point_in_rect(CanvasPoint::new(300.0, 200.0), rect()));
        assert!(is_point_in_rect(CanvasPoint::new(150.0, 150.0), rect()));
        assert!(!is_point_in_rect(CanvasPoint::new(99.9, 150.0), rect()));
        assert!(!is_point_in_rect(CanvasPoint::new(150.0, 200.1), rect()));
    }

    #[test]
    fn corner_handles_resolve_within_chebyshev_zone() {
        assert_eq!(
            resize_handle_at_point(CanvasPoint::new(104.0, 96.0), rect()),
            Some(ResizeHandle::TopLeft)
        );
        assert_eq!(
            resize_handle_at_point(CanvasPoint::new(300.0, 200.0), rect()),
            Some(ResizeHandle::BottomRight)
        );
        assert_eq!(
            resize_handle_at_point(CanvasPoint::new(296.0, 104.0), rect()),
            Some(ResizeHandle::TopRight)
        );
        assert_eq!(
            resize_handle_at_point(CanvasPoint::new(150.0, 150.0), rect()),
            None
        );
    }

    #[test]
    fn corner_zone_wins_over_overlapping_edge_zone() {
        // 6 px below the top-left corner: inside the corner's zone and on
        // the left edge band. The corner must win.
        assert_eq!(
            resize_handle_at_point(CanvasPoint::new(100.0, 106.0), rect()),
            Some(ResizeHandle::TopLeft)
        );
        // Just past the corner zone the same band resolves to the edge.
        assert_eq!(
            resize_handle_at_point(CanvasPoint::new(100.0, 120.0), rect()),
            Some(ResizeHandle::Left)
        );
    }

    #[test]
    fn edge_zones_require_strictly_interior_perpendicular_coordinate() {
        // Exactly level with the top bound: outside every corner zone, and
        // the left edge requires y strictly inside, so nothing matches.
        assert_eq!(
            resize_handle_at_point(CanvasPoint::new(100.0, 100.0 - HANDLE_SIZE - 4.0), rect()),
            None
        );
        assert_eq!(
            resize_handle_at_point(CanvasPoint::new(200.0, 100.0), rect()),
            Some(ResizeHandle::Top)
        );
        assert_eq!(
            resize_handle_at_point(CanvasPoint::new(200.0, 204.0), rect()),
            Some(ResizeHandle::Bottom)
        );
        assert_eq!(
            resize_handle_at_point(CanvasPoint::new(304.0, 150.0), rect()),
            Some(ResizeHandle::Right)
        );
    }

    #[test]
    fn edge_anchor_points_sit_at_midpoints() {
        assert_eq!(
            handle_anchor(rect(), ResizeHandle::Top),
            CanvasPoint::new(200.0, 100.0)
        );
        assert_eq!(
            handle_anchor(rect(), ResizeHandle::Right),
            CanvasPoint::new(300.0, 150.0)
        );
        assert_eq!(
            handle_anchor(rect(), ResizeHandle::BottomLeft),
            CanvasPoint::new(100.0, 200.0)
        );
    }

    #[test]
    fn overlapping_regions_resolve_to_first_in_list_order() {
        let image = ImageSize::new(1000.0, 1000.0);
        let back = EventRegion::new(PercentRect::new(10.0, 10.0, 40.0, 40.0), None);
        let front = EventRegion::new(PercentRect::new(10.0, 10.0, 40.0, 40.0), None);
        let regions = vec![back, front];

        let inside = CanvasPoint::new(300.0, 300.0);
        assert_eq!(first_body_hit(inside, &regions, image), Some(0));

        let corner = CanvasPoint::new(100.0, 100.0);
        assert_eq!(
            first_handle_hit(corner, &regions, image),
            Some((0, ResizeHandle::TopLeft))
        );
    }
}
