//! Renderable gallery state
//!
//! The host reads the scene after every tick and draws it: the scrim over
//! the presenting screen, then the paging surface scrolled to
//! `content_offset`, with each borrowed image at its frame.

use lightbox_core::{Color, Rect, Size};

/// One image on the paging surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageLayer {
    /// Frame in content coordinates
    pub frame: Rect,
    pub corner_radius: f32,
    pub opacity: f32,
}

/// Everything the host needs to draw the gallery for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryScene {
    /// Scrim color at full presentation
    pub scrim_color: Color,
    /// Scrim visibility from 0 (hidden) to 1 (fully presented)
    pub scrim_opacity: f32,
    /// Opacity of the gallery chrome (close button)
    pub chrome_opacity: f32,
    /// Horizontal scroll position of the paging surface
    pub content_offset: f32,
    /// Size of the paging surface
    pub content_size: Size,
    /// Images in source order
    pub images: Vec<ImageLayer>,
}

impl GalleryScene {
    pub(crate) fn new(scrim_color: Color, content_size: Size, content_offset: f32) -> Self {
        Self {
            scrim_color,
            scrim_opacity: 0.0,
            chrome_opacity: 0.0,
            content_offset,
            content_size,
            images: Vec::new(),
        }
    }

    /// Scrim color with the current opacity applied
    pub fn scrim(&self) -> Color {
        let opacity = self.scrim_opacity.clamp(0.0, 1.0);
        self.scrim_color.with_alpha(self.scrim_color.a * opacity)
    }

    /// Image frames in source order
    pub fn frames(&self) -> Vec<Rect> {
        self.images.iter().map(|image| image.frame).collect()
    }

    pub fn image(&self, index: usize) -> Option<&ImageLayer> {
        self.images.get(index)
    }

    /// Frame of image `index` in screen coordinates, given the container's screen frame
    pub fn screen_frame(&self, index: usize, container: Rect) -> Option<Rect> {
        self.images.get(index).map(|image| {
            image
                .frame
                .offset(container.x() - self.content_offset, container.y())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrim_alpha_scales_with_opacity() {
        let mut scene = GalleryScene::new(Color::white(0.0, 0.5), Size::ZERO, 0.0);
        assert_eq!(scene.scrim().a, 0.0);
        scene.scrim_opacity = 0.5;
        assert_eq!(scene.scrim().a, 0.25);
        scene.scrim_opacity = 1.0;
        assert_eq!(scene.scrim(), Color::rgba(0.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn test_screen_frame_removes_scroll() {
        let mut scene = GalleryScene::new(Color::BLACK, Size::new(900.0, 600.0), 300.0);
        scene.images.push(ImageLayer {
            frame: Rect::new(300.0, 150.0, 300.0, 300.0),
            corner_radius: 0.0,
            opacity: 1.0,
        });
        assert_eq!(
            scene.screen_frame(0, Rect::new(0.0, 20.0, 300.0, 600.0)),
            Some(Rect::new(0.0, 170.0, 300.0, 300.0))
        );
        assert_eq!(scene.screen_frame(1, Rect::ZERO), None);
    }
}
