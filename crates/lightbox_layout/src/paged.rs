//! Paged gallery layout
//!
//! Page `i` covers `(i * w, 0, w, h)` for a `w x h` viewport. The image on
//! that page spans the full page width and is vertically centered, with its
//! height taken from the image ratio. Pages keep the order of the source
//! handles and never overlap or leave gaps.
//!
//! Every page origin is computed with one multiplication so positions do not
//! drift with the page count, and they match [`offset_for_page`] exactly.

use lightbox_core::{image_ratio, Point, Rect, SelectableImage, Size};

/// Frames for one page of the gallery
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSlot {
    /// The full page, one viewport in size
    pub page_frame: Rect,
    /// Where the image sits inside the page, in content coordinates
    pub image_frame: Rect,
}

/// Computed paged layout for an ordered set of images
#[derive(Clone, Debug, PartialEq)]
pub struct PagedLayout {
    viewport: Size,
    pages: Vec<PageSlot>,
}

impl PagedLayout {
    /// Lay out pages for images with the given width-to-height ratios
    ///
    /// Ratios that are not positive and finite are treated as square.
    pub fn from_ratios(ratios: impl IntoIterator<Item = f32>, viewport: Size) -> Self {
        let pages = ratios
            .into_iter()
            .enumerate()
            .map(|(index, ratio)| {
                let ratio = if ratio.is_finite() && ratio > 0.0 {
                    ratio
                } else {
                    1.0
                };
                page_slot(index, ratio, viewport)
            })
            .collect();
        Self { viewport, pages }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Slot for page `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn page(&self, index: usize) -> &PageSlot {
        &self.pages[index]
    }

    pub fn get(&self, index: usize) -> Option<&PageSlot> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> &[PageSlot] {
        &self.pages
    }

    /// Image frames in page order
    pub fn image_frames(&self) -> Vec<Rect> {
        self.pages.iter().map(|slot| slot.image_frame).collect()
    }

    /// Size of the scrollable paging surface
    pub fn content_size(&self) -> Size {
        total_content_size(self.pages.len(), self.viewport)
    }
}

fn page_slot(index: usize, ratio: f32, viewport: Size) -> PageSlot {
    let page_x = offset_for_page(index, viewport.width);
    let page_frame = Rect::new(page_x, 0.0, viewport.width, viewport.height);

    let image_size = Size::new(viewport.width, viewport.width / ratio);
    let image_frame = Rect::from_origin_size(
        Point::new(page_x, (viewport.height - image_size.height) / 2.0),
        image_size,
    );

    PageSlot {
        page_frame,
        image_frame,
    }
}

/// Compute the paged layout for `handles` in a viewport of `viewport` size
pub fn paged_layout<H: SelectableImage>(handles: &[H], viewport: Size) -> PagedLayout {
    let layout = PagedLayout::from_ratios(
        handles.iter().enumerate().map(|(index, handle)| {
            let size = handle.intrinsic_size();
            if size.map_or(true, |s| s.is_degenerate()) {
                tracing::warn!(index, ?size, "image has no usable size, laying out as square");
            }
            image_ratio(size)
        }),
        viewport,
    );
    tracing::debug!(
        pages = layout.len(),
        width = viewport.width,
        height = viewport.height,
        "computed paged layout"
    );
    layout
}

/// Size of the paging surface: one viewport per image, laid side by side
pub fn total_content_size(count: usize, viewport: Size) -> Size {
    Size::new(count as f32 * viewport.width, viewport.height)
}

/// Horizontal scroll offset that brings page `index` fully into view
pub fn offset_for_page(index: usize, viewport_width: f32) -> f32 {
    index as f32 * viewport_width
}

/// Page nearest to a horizontal scroll offset, clamped to `[0, count)`
///
/// Returns 0 for an empty gallery or a non-positive page width.
pub fn page_for_offset(offset_x: f32, viewport_width: f32, count: usize) -> usize {
    if count == 0 || viewport_width <= 0.0 || !offset_x.is_finite() {
        return 0;
    }
    let page = (offset_x / viewport_width).round();
    if page <= 0.0 {
        0
    } else {
        (page as usize).min(count - 1)
    }
}
