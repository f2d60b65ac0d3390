//! Docked layout: images where their thumbnails are

use lightbox_core::{Rect, SelectableImage};

use crate::space::CoordinateSpace;

/// Each handle's current screen rect, converted into `space`
///
/// Thumbnails are queried at call time, so calling this again after the
/// grid scrolled returns the new positions.
pub fn docked_frames<H: SelectableImage>(handles: &[H], space: &CoordinateSpace) -> Vec<Rect> {
    handles
        .iter()
        .map(|handle| space.from_screen(handle.current_screen_rect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightbox_core::{Point, Size, Vec2};

    struct Thumb(Rect);

    impl SelectableImage for Thumb {
        type Surface = ();

        fn intrinsic_size(&self) -> Option<Size> {
            None
        }

        fn current_screen_rect(&self) -> Rect {
            self.0
        }

        fn detach_image_surface(&mut self) -> Option<()> {
            None
        }

        fn attach_image_surface(&mut self, _surface: ()) {}
    }

    #[test]
    fn test_frames_follow_thumbnails_in_order() {
        let handles = [
            Thumb(Rect::new(0.0, 100.0, 100.0, 100.0)),
            Thumb(Rect::new(100.0, 100.0, 100.0, 100.0)),
            Thumb(Rect::new(0.0, 200.0, 100.0, 100.0)),
        ];
        let space = CoordinateSpace::new(Point::ZERO, Vec2::new(300.0, 0.0));

        let frames = docked_frames(&handles, &space);
        assert_eq!(
            frames,
            vec![
                Rect::new(300.0, 100.0, 100.0, 100.0),
                Rect::new(400.0, 100.0, 100.0, 100.0),
                Rect::new(300.0, 200.0, 100.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let handles: Vec<Thumb> = Vec::new();
        assert!(docked_frames(&handles, &CoordinateSpace::screen()).is_empty());
    }
}
