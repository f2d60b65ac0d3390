//! Selectable image handles
//!
//! A handle is a reference to one thumbnail in the host's grid. The gallery
//! never owns the thumbnail itself; it only queries its geometry and borrows
//! the rendered image surface for the lifetime of a session.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::{Rect, Size};

/// A thumbnail the gallery can expand from and collapse back into
///
/// Implementations are usually cheap references into the host's widget
/// tree. An `Rc<RefCell<T>>` of any implementor is itself a handle, so hosts
/// can keep their own clone to observe the thumbnail while a session runs.
pub trait SelectableImage {
    /// The detachable view that renders the image
    type Surface;

    /// Pixel size of the image payload, if the payload reports one
    fn intrinsic_size(&self) -> Option<Size>;

    /// The thumbnail's frame in screen coordinates, queried fresh each call
    fn current_screen_rect(&self) -> Rect;

    /// Corner radius the thumbnail clips its image to
    fn corner_radius(&self) -> f32 {
        0.0
    }

    /// Take the image surface out of the thumbnail
    ///
    /// Returns `None` if the thumbnail does not currently hold its surface.
    fn detach_image_surface(&mut self) -> Option<Self::Surface>;

    /// Give the image surface back to the thumbnail
    fn attach_image_surface(&mut self, surface: Self::Surface);
}

impl<T: SelectableImage> SelectableImage for Rc<RefCell<T>> {
    type Surface = T::Surface;

    fn intrinsic_size(&self) -> Option<Size> {
        self.borrow().intrinsic_size()
    }

    fn current_screen_rect(&self) -> Rect {
        self.borrow().current_screen_rect()
    }

    fn corner_radius(&self) -> f32 {
        self.borrow().corner_radius()
    }

    fn detach_image_surface(&mut self) -> Option<Self::Surface> {
        self.borrow_mut().detach_image_surface()
    }

    fn attach_image_surface(&mut self, surface: Self::Surface) {
        self.borrow_mut().attach_image_surface(surface)
    }
}

/// Width-to-height ratio of an image payload
///
/// Falls back to a square ratio of 1.0 when the payload has no intrinsic
/// size or reports a zero, negative, or non-finite dimension. The result is
/// always positive.
pub fn image_ratio(intrinsic_size: Option<Size>) -> f32 {
    match intrinsic_size {
        Some(size) if !size.is_degenerate() => {
            let ratio = size.width / size.height;
            if ratio.is_finite() && ratio > 0.0 {
                ratio
            } else {
                1.0
            }
        }
        _ => 1.0,
    }
}
