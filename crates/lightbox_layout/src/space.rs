//! Shared coordinate space for the transition
//!
//! Gallery frames live in the paging content's coordinate space: x grows
//! across pages and a page's origin is `offset_for_page(i, width)`. Thumbnail
//! frames arrive in screen coordinates, so they are shifted by the gallery
//! container's screen origin and by the current content offset.

use lightbox_core::{Point, Rect, Vec2};

/// Gallery container placement used to convert screen rects into content space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoordinateSpace {
    /// Top-left of the gallery container in screen coordinates
    pub origin: Point,
    /// Scroll position of the paging content
    pub content_offset: Vec2,
}

impl CoordinateSpace {
    pub fn new(origin: Point, content_offset: Vec2) -> Self {
        Self {
            origin,
            content_offset,
        }
    }

    /// Container at the screen origin with no scroll
    pub fn screen() -> Self {
        Self::default()
    }

    /// Same container scrolled horizontally to `offset_x`
    pub fn with_content_offset_x(mut self, offset_x: f32) -> Self {
        self.content_offset = Vec2::new(offset_x, self.content_offset.y);
        self
    }

    /// Convert a screen rect into content coordinates
    pub fn from_screen(&self, rect: Rect) -> Rect {
        rect.offset(
            self.content_offset.x - self.origin.x,
            self.content_offset.y - self.origin.y,
        )
    }

    /// Convert a content rect back to screen coordinates
    pub fn to_screen(&self, rect: Rect) -> Rect {
        rect.offset(
            self.origin.x - self.content_offset.x,
            self.origin.y - self.content_offset.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_space_is_identity() {
        let rect = Rect::new(12.0, 40.0, 80.0, 80.0);
        assert_eq!(CoordinateSpace::screen().from_screen(rect), rect);
    }

    #[test]
    fn test_conversion_accounts_for_origin_and_scroll() {
        let space = CoordinateSpace::new(Point::new(0.0, 20.0), Vec2::ZERO)
            .with_content_offset_x(600.0);
        let thumb = Rect::new(10.0, 120.0, 50.0, 50.0);

        let local = space.from_screen(thumb);
        assert_eq!(local, Rect::new(610.0, 100.0, 50.0, 50.0));
        assert_eq!(space.to_screen(local), thumb);
    }
}
