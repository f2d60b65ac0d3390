//! Image surface ownership
//!
//! Every image surface has exactly one owner at a time: either the thumbnail
//! it came from or the gallery's paged surface. The registry keeps one slot
//! per handle (keyed by the handle's position in the session) with the
//! current owner tag and, while the gallery owns it, the parked surface.
//!
//! Transfers are single detach-then-attach steps. A slot is never left in a
//! state where neither side holds the surface.

use crate::error::ContractViolation;
use crate::image::SelectableImage;

/// Which side currently holds an image surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SurfaceOwner {
    /// Attached to its originating thumbnail
    #[default]
    Thumbnail,
    /// Parked on the gallery's paged surface
    Gallery,
}

struct SurfaceSlot<S> {
    owner: SurfaceOwner,
    parked: Option<S>,
}

/// Registry of image surfaces borrowed by a gallery session
pub struct SurfaceRegistry<S> {
    slots: Vec<SurfaceSlot<S>>,
}

impl<S> SurfaceRegistry<S> {
    /// Create a registry for `count` handles, all owned by their thumbnails
    pub fn new(count: usize) -> Self {
        let slots = (0..count)
            .map(|_| SurfaceSlot {
                owner: SurfaceOwner::Thumbnail,
                parked: None,
            })
            .collect();
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current owner of the surface for handle `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn owner(&self, index: usize) -> SurfaceOwner {
        self.slots[index].owner
    }

    /// The surface parked on the gallery for handle `index`, if any
    pub fn surface(&self, index: usize) -> Option<&S> {
        self.slots.get(index).and_then(|slot| slot.parked.as_ref())
    }

    /// Number of surfaces currently owned by the gallery
    pub fn gallery_owned(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.owner == SurfaceOwner::Gallery)
            .count()
    }

    /// Move the surface of handle `index` from its thumbnail to the gallery
    ///
    /// Adopting a surface the gallery already owns is a no-op.
    pub fn adopt<H>(&mut self, index: usize, handle: &mut H) -> Result<(), ContractViolation>
    where
        H: SelectableImage<Surface = S>,
    {
        let slot = &mut self.slots[index];
        if slot.owner == SurfaceOwner::Gallery {
            return Ok(());
        }

        let surface = handle
            .detach_image_surface()
            .ok_or(ContractViolation::SurfaceUnavailable { index })?;
        slot.parked = Some(surface);
        slot.owner = SurfaceOwner::Gallery;
        tracing::trace!(index, "image surface moved to gallery");
        Ok(())
    }

    /// Move the surface of handle `index` back to its thumbnail
    ///
    /// Returns `false` if the thumbnail already owned it.
    pub fn release<H>(&mut self, index: usize, handle: &mut H) -> bool
    where
        H: SelectableImage<Surface = S>,
    {
        let slot = &mut self.slots[index];
        match slot.parked.take() {
            Some(surface) => {
                handle.attach_image_surface(surface);
                slot.owner = SurfaceOwner::Thumbnail;
                tracing::trace!(index, "image surface returned to thumbnail");
                true
            }
            None => false,
        }
    }

    /// Return every gallery-owned surface to its thumbnail
    ///
    /// Returns the number of surfaces that moved.
    pub fn release_all<H>(&mut self, handles: &mut [H]) -> usize
    where
        H: SelectableImage<Surface = S>,
    {
        debug_assert_eq!(handles.len(), self.slots.len());
        let mut moved = 0;
        for (index, handle) in handles.iter_mut().enumerate() {
            if self.release(index, handle) {
                moved += 1;
            }
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, Size};

    #[derive(Default)]
    struct Thumb {
        surface: Option<&'static str>,
    }

    impl SelectableImage for Thumb {
        type Surface = &'static str;

        fn intrinsic_size(&self) -> Option<Size> {
            None
        }

        fn current_screen_rect(&self) -> Rect {
            Rect::ZERO
        }

        fn detach_image_surface(&mut self) -> Option<&'static str> {
            self.surface.take()
        }

        fn attach_image_surface(&mut self, surface: &'static str) {
            assert!(self.surface.is_none(), "thumbnail already holds a surface");
            self.surface = Some(surface);
        }
    }

    #[test]
    fn test_adopt_and_release_single_owner() {
        let mut thumbs = vec![
            Thumb { surface: Some("a") },
            Thumb { surface: Some("b") },
        ];
        let mut registry = SurfaceRegistry::new(2);

        registry.adopt(0, &mut thumbs[0]).unwrap();
        assert_eq!(registry.owner(0), SurfaceOwner::Gallery);
        assert_eq!(registry.owner(1), SurfaceOwner::Thumbnail);
        assert_eq!(registry.surface(0), Some(&"a"));
        assert!(thumbs[0].surface.is_none());

        // Adopting twice does not detach again
        registry.adopt(0, &mut thumbs[0]).unwrap();
        assert_eq!(registry.gallery_owned(), 1);

        assert!(registry.release(0, &mut thumbs[0]));
        assert!(!registry.release(0, &mut thumbs[0]));
        assert_eq!(thumbs[0].surface, Some("a"));
        assert_eq!(registry.gallery_owned(), 0);
    }

    #[test]
    fn test_release_all_returns_everything() {
        let mut thumbs = vec![
            Thumb { surface: Some("a") },
            Thumb { surface: Some("b") },
            Thumb { surface: Some("c") },
        ];
        let mut registry = SurfaceRegistry::new(3);
        for (i, thumb) in thumbs.iter_mut().enumerate() {
            registry.adopt(i, thumb).unwrap();
        }
        assert_eq!(registry.gallery_owned(), 3);

        assert_eq!(registry.release_all(&mut thumbs), 3);
        assert_eq!(registry.gallery_owned(), 0);
        assert_eq!(thumbs[2].surface, Some("c"));
    }

    #[test]
    fn test_missing_surface_is_a_violation() {
        let mut thumb = Thumb::default();
        let mut registry = SurfaceRegistry::new(1);
        assert_eq!(
            registry.adopt(0, &mut thumb),
            Err(ContractViolation::SurfaceUnavailable { index: 0 })
        );
        assert_eq!(registry.owner(0), SurfaceOwner::Thumbnail);
    }
}
