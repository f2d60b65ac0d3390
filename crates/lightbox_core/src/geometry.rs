//! Core geometry types
//!
//! All values are in logical points. Frames use a top-left origin with
//! y growing downward, matching the coordinate space of touch hosts.

// ─────────────────────────────────────────────────────────────────────────────
// Point / Vec2
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate the point by a vector
    pub fn translate(&self, delta: Vec2) -> Self {
        Point::new(self.x + delta.x, self.y + delta.y)
    }
}

/// 2D vector (translations and velocities)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Size
// ─────────────────────────────────────────────────────────────────────────────

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }

    /// True when either dimension is zero, negative, or not finite
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

impl From<Size> for Rect {
    fn from(size: Size) -> Self {
        size.to_rect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rect
// ─────────────────────────────────────────────────────────────────────────────

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Offset the rect by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }

    /// Offset the rect by a vector
    pub fn translate(&self, delta: Vec2) -> Self {
        self.offset(delta.x, delta.y)
    }

    /// Check if this rect intersects with another
    ///
    /// Edges that merely touch do not count as overlap, so adjacent pages
    /// are reported as disjoint.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.origin.x < other.max_x()
            && self.max_x() > other.origin.x
            && self.origin.y < other.max_y()
            && self.max_y() > other.origin.y
    }

    /// Linear interpolation between two rects, component-wise
    pub fn lerp(a: &Rect, b: &Rect, t: f32) -> Rect {
        Rect::new(
            a.origin.x + (b.origin.x - a.origin.x) * t,
            a.origin.y + (b.origin.y - a.origin.y) * t,
            a.size.width + (b.size.width - a.size.width) * t,
            a.size.height + (b.size.height - a.size.height) * t,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center_and_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
        assert_eq!(r.max_x(), 110.0);
        assert_eq!(r.max_y(), 70.0);
    }

    #[test]
    fn test_adjacent_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 300.0, 600.0);
        let b = Rect::new(300.0, 0.0, 300.0, 600.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&b.offset(-1.0, 0.0)));
    }

    #[test]
    fn test_rect_lerp_endpoints() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(100.0, 50.0, 30.0, 20.0);
        assert_eq!(Rect::lerp(&a, &b, 0.0), a);
        assert_eq!(Rect::lerp(&a, &b, 1.0), b);
        assert_eq!(Rect::lerp(&a, &b, 0.5), Rect::new(50.0, 25.0, 20.0, 15.0));
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(Size::ZERO.is_degenerate());
        assert!(Size::new(10.0, 0.0).is_degenerate());
        assert!(Size::new(f32::NAN, 10.0).is_degenerate());
        assert!(!Size::new(1.0, 1.0).is_degenerate());
    }
}
