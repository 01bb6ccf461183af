// SPDX-License-Identifier: MPL-2.0

//! Layout values derived from the carousel bounds.
//!
//! All offsets here are in content coordinates: `0.0` is the left edge of
//! the first cell, so an offset can be negative down to `-inset()`.

use super::error::CarouselError;

/// Vertical room left above and below a cell so it can grow while focused.
pub const IMAGE_ZOOM_SPACE: f32 = 40.0;
/// Height of the page indicator bar at the bottom of the widget.
pub const PAGING_CONTROL_HEIGHT: f32 = 30.0;
/// Corner radius of an unscaled cell.
pub const CORNER_RADIUS: f32 = 20.0;
/// Extra scale applied to a cell sitting exactly at the center.
pub const MAX_SCALE_BOOST: f32 = 0.2;

/// Sizes and positions computed from the widget's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselMetrics {
    width: f32,
    height: f32,
    item_size: f32,
}

impl CarouselMetrics {
    /// Computes the metrics for a widget of the given size.
    ///
    /// Fails when the height leaves no positive room for a cell.
    pub fn new(width: f32, height: f32) -> Result<Self, CarouselError> {
        let required = IMAGE_ZOOM_SPACE + PAGING_CONTROL_HEIGHT;
        if !(height > required) {
            return Err(CarouselError::InsufficientHeight { height, required });
        }

        Ok(Self {
            width,
            height,
            item_size: height - IMAGE_ZOOM_SPACE - PAGING_CONTROL_HEIGHT,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Side length of every (square) cell.
    pub fn item_size(&self) -> f32 {
        self.item_size
    }

    /// Height of the scroll strip, which sits above the page indicator.
    pub fn strip_height(&self) -> f32 {
        self.height - PAGING_CONTROL_HEIGHT
    }

    /// Leading and trailing content inset.
    pub fn inset(&self) -> f32 {
        self.item_size / 2.0
    }

    /// Width of `count` cells laid edge to edge, insets excluded.
    pub fn content_width(&self, count: usize) -> f32 {
        count as f32 * self.item_size
    }

    /// The offset that puts cell `index` in the middle of the widget.
    pub fn centering_offset(&self, index: usize) -> f32 {
        index as f32 * self.item_size - (self.width - self.item_size) / 2.0
    }

    /// X coordinate of the center of cell `index`.
    pub fn cell_center_x(&self, index: usize) -> f32 {
        index as f32 * self.item_size + self.item_size / 2.0
    }

    /// X coordinate of the visible center at the given offset.
    pub fn scroll_center_x(&self, offset: f32) -> f32 {
        self.width / 2.0 + offset
    }

    /// Signed distance from the visible center to the center of cell `index`.
    pub fn distance_from_center(&self, offset: f32, index: usize) -> f32 {
        self.scroll_center_x(offset) - self.cell_center_x(index)
    }

    /// Scale of a cell whose center is `distance` away from the visible center.
    ///
    /// Decays linearly from `1.0 + MAX_SCALE_BOOST` at the center to `1.0`
    /// half a cell away, and stays at `1.0` beyond that.
    pub fn scale_for_distance(&self, distance: f32) -> f32 {
        let threshold = self.item_size / 2.0;
        let distance = distance.abs();

        if distance <= threshold {
            let normalized = distance / threshold;
            1.0 + MAX_SCALE_BOOST * (1.0 - normalized)
        } else {
            1.0
        }
    }

    /// Whether a cell at `distance` is drawn above its neighbours.
    pub fn in_focus_zone(&self, distance: f32) -> bool {
        distance.abs() < self.item_size / 2.0
    }

    /// Converts a content offset into the scrollable's offset, which starts
    /// at zero on the leading inset.
    pub fn to_surface(&self, offset: f32) -> f32 {
        offset + self.inset()
    }

    /// Converts a scrollable offset back into content coordinates.
    pub fn from_surface(&self, surface_offset: f32) -> f32 {
        surface_offset - self.inset()
    }

    /// Largest offset the scrollable can reach for `count` cells.
    pub fn max_surface_offset(&self, count: usize) -> f32 {
        (2.0 * self.inset() + self.content_width(count) - self.width).max(0.0)
    }

    /// Scrollable offset for a content offset, clamped to what the
    /// scrollable can actually reach.
    pub fn clamped_surface_offset(&self, offset: f32, count: usize) -> f32 {
        self.to_surface(offset)
            .clamp(0.0, self.max_surface_offset(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(width: f32) -> CarouselMetrics {
        // 170 - 40 - 30 = 100
        CarouselMetrics::new(width, 170.0).unwrap()
    }

    #[test]
    fn test_item_size_from_height() {
        let m = CarouselMetrics::new(390.0, 250.0).unwrap();

        assert_eq!(m.item_size(), 180.0);
        assert_eq!(m.inset(), 90.0);
        assert_eq!(m.strip_height(), 220.0);
        assert_eq!(m.content_width(5), 900.0);
    }

    #[test]
    fn test_insufficient_height() {
        assert_eq!(
            CarouselMetrics::new(300.0, 70.0),
            Err(CarouselError::InsufficientHeight {
                height: 70.0,
                required: 70.0
            })
        );
        assert!(CarouselMetrics::new(300.0, f32::NAN).is_err());
    }

    #[test]
    fn test_centering_offset() {
        let m = metrics(300.0);

        assert_eq!(m.centering_offset(2), 200.0 - 100.0);
        assert_eq!(m.centering_offset(0), -100.0);
        // The centered cell sits exactly under the visible center.
        assert_eq!(m.distance_from_center(m.centering_offset(3), 3), 0.0);
    }

    #[test]
    fn test_scale_endpoints() {
        let m = metrics(300.0);

        assert!((m.scale_for_distance(0.0) - 1.2).abs() < 1e-6);
        assert_eq!(m.scale_for_distance(50.0), 1.0);
        assert_eq!(m.scale_for_distance(-50.0), 1.0);
        assert_eq!(m.scale_for_distance(120.0), 1.0);
        assert!((m.scale_for_distance(25.0) - 1.1).abs() < 1e-6);
        assert!((m.scale_for_distance(-25.0) - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_scale_is_monotonic_and_continuous() {
        let m = metrics(300.0);
        let mut previous = m.scale_for_distance(0.0);

        for step in 1..=120 {
            let scale = m.scale_for_distance(step as f32 * 0.5);
            assert!(scale <= previous);
            assert!(previous - scale < 0.005);
            previous = scale;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn test_focus_zone_is_strict() {
        let m = metrics(300.0);

        assert!(m.in_focus_zone(49.9));
        assert!(m.in_focus_zone(-49.9));
        assert!(!m.in_focus_zone(50.0));
    }

    #[test]
    fn test_surface_conversion() {
        let m = metrics(300.0);

        assert_eq!(m.to_surface(-50.0), 0.0);
        assert_eq!(m.from_surface(150.0), 100.0);
        // 2 * 50 + 500 - 300
        assert_eq!(m.max_surface_offset(5), 300.0);
        assert_eq!(m.clamped_surface_offset(-100.0, 5), 0.0);
        assert_eq!(m.clamped_surface_offset(100.0, 5), 150.0);
        assert_eq!(m.clamped_surface_offset(1_000.0, 5), 300.0);
        assert_eq!(m.max_surface_offset(1), 0.0);
    }
}
