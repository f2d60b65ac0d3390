//! Animatable value types
//!
//! Linear interpolation for the geometry and color types the gallery
//! animates.

use lightbox_core::{Color, Point, Rect, Size, Vec2};

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    ///
    /// Springs may overshoot, so `t` is not clamped except where a type
    /// cannot represent values outside its range (colors).
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Point {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Point::new(
            Interpolate::lerp(&self.x, &other.x, t),
            Interpolate::lerp(&self.y, &other.y, t),
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.approx_eq(&other.x, epsilon) && self.y.approx_eq(&other.y, epsilon)
    }
}

impl Interpolate for Vec2 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec2::new(
            Interpolate::lerp(&self.x, &other.x, t),
            Interpolate::lerp(&self.y, &other.y, t),
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.approx_eq(&other.x, epsilon) && self.y.approx_eq(&other.y, epsilon)
    }
}

impl Interpolate for Size {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Size::new(
            Interpolate::lerp(&self.width, &other.width, t),
            Interpolate::lerp(&self.height, &other.height, t),
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.width.approx_eq(&other.width, epsilon) && self.height.approx_eq(&other.height, epsilon)
    }
}

impl Interpolate for Rect {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Rect::lerp(self, other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.origin.approx_eq(&other.origin, epsilon) && self.size.approx_eq(&other.size, epsilon)
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert_eq!(Interpolate::lerp(&0.0_f32, &100.0, 0.0), 0.0);
        assert_eq!(Interpolate::lerp(&0.0_f32, &100.0, 0.5), 50.0);
        assert_eq!(Interpolate::lerp(&0.0_f32, &100.0, 1.0), 100.0);
    }

    #[test]
    fn test_rect_lerp_allows_overshoot() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let over = Interpolate::lerp(&a, &b, 1.1);
        assert!(over.approx_eq(&Rect::new(11.0, 0.0, 10.0, 10.0), 1e-4));
    }

    #[test]
    fn test_color_lerp_is_clamped() {
        let clear = Color::TRANSPARENT;
        let scrim = Color::BLACK.with_alpha(0.5);
        assert!(Interpolate::lerp(&clear, &scrim, 2.0).approx_eq(&scrim, 1e-6));
        assert!(Interpolate::lerp(&clear, &scrim, 0.5).approx_eq(&Color::BLACK.with_alpha(0.25), 1e-6));
    }
}
