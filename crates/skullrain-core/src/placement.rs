//! Keep-clear rectangle reserved for the centered art.

use ratatui::layout::{Rect, Size};

/// Centered rectangle where the art is drawn and the rain is not.
///
/// The origin is signed: art larger than the terminal is centered around
/// the middle of the screen and hangs off its edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl PlacementRect {
    /// Center a `width` x `height` block inside a screen of the given size.
    pub fn centered(screen: Size, width: u16, height: u16) -> Self {
        Self {
            x: i32::from(screen.width) / 2 - i32::from(width) / 2,
            y: i32::from(screen.height) / 2 - i32::from(height) / 2,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    pub fn right(&self) -> i32 {
        self.x + i32::from(self.width)
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> i32 {
        self.y + i32::from(self.height)
    }

    /// Whether the cell at `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether a glyph occupying `width` cells from `(x, y)` would touch the
    /// rectangle.
    pub fn overlaps_span(&self, x: i32, width: u16, y: i32) -> bool {
        (x..x + i32::from(width.max(1))).any(|cell| self.contains(cell, y))
    }

    /// Clip the rectangle to `area`.
    ///
    /// Returns the visible part plus the `(rows, columns)` cut off the top
    /// and left, or `None` when nothing is visible.
    pub fn clip(&self, area: Rect) -> Option<(Rect, (u16, u16))> {
        let left = self.x.max(i32::from(area.left()));
        let top = self.y.max(i32::from(area.top()));
        let right = self.right().min(i32::from(area.right()));
        let bottom = self.bottom().min(i32::from(area.bottom()));
        if right <= left || bottom <= top {
            return None;
        }

        let visible = Rect::new(
            u16::try_from(left).ok()?,
            u16::try_from(top).ok()?,
            u16::try_from(right - left).ok()?,
            u16::try_from(bottom - top).ok()?,
        );
        let offset = (
            u16::try_from(top - self.y).ok()?,
            u16::try_from(left - self.x).ok()?,
        );
        Some((visible, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(x: i32, y: i32, width: u16, height: u16) -> PlacementRect {
        PlacementRect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_centered_in_screen() {
        let rect = PlacementRect::centered(Size::new(80, 24), 20, 10);
        assert_eq!(rect, placement(30, 7, 20, 10));
    }

    #[test]
    fn test_centered_uses_per_term_integer_division() {
        // 81 / 2 - 21 / 2 = 40 - 10
        let rect = PlacementRect::centered(Size::new(81, 25), 21, 11);
        assert_eq!((rect.x, rect.y), (30, 7));
    }

    #[test]
    fn test_centered_art_larger_than_screen() {
        let rect = PlacementRect::centered(Size::new(10, 4), 30, 12);
        assert_eq!((rect.x, rect.y), (-10, -4));
    }

    #[test]
    fn test_contains_edges() {
        let rect = placement(5, 2, 4, 3);
        assert!(rect.contains(5, 2));
        assert!(rect.contains(8, 4));
        assert!(!rect.contains(9, 4));
        assert!(!rect.contains(8, 5));
        assert!(!rect.contains(4, 2));
        assert!(!rect.contains(5, 1));
    }

    #[test]
    fn test_overlaps_span_with_wide_glyph() {
        let rect = placement(5, 2, 4, 3);
        // A double-width glyph starting one column left spills into the rect.
        assert!(rect.overlaps_span(4, 2, 3));
        assert!(!rect.overlaps_span(3, 2, 3));
        assert!(rect.overlaps_span(8, 2, 3));
        assert!(!rect.overlaps_span(9, 2, 3));
        assert!(!rect.overlaps_span(5, 2, 5));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let rect = PlacementRect::centered(Size::new(80, 24), 0, 0);
        assert!(!rect.contains(40, 12));
        assert!(!rect.overlaps_span(39, 2, 12));
        assert_eq!(rect.clip(Rect::new(0, 0, 80, 24)), None);
    }

    #[test]
    fn test_clip_inside_area() {
        let rect = placement(30, 7, 20, 10);
        let (visible, offset) = rect.clip(Rect::new(0, 0, 80, 24)).unwrap();
        assert_eq!(visible, Rect::new(30, 7, 20, 10));
        assert_eq!(offset, (0, 0));
    }

    #[test]
    fn test_clip_hanging_off_top_left() {
        let rect = placement(-3, -2, 10, 6);
        let (visible, offset) = rect.clip(Rect::new(0, 0, 5, 3)).unwrap();
        assert_eq!(visible, Rect::new(0, 0, 5, 3));
        assert_eq!(offset, (2, 3));
    }

    #[test]
    fn test_clip_outside_area() {
        let rect = placement(100, 0, 10, 6);
        assert_eq!(rect.clip(Rect::new(0, 0, 80, 24)), None);
    }
}
