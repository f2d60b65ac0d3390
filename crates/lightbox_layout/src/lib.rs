//! Lightbox Layout Engine
//!
//! Pure geometry for the gallery transition. Nothing here touches the
//! animation runtime, so every function can be tested on its own.
//!
//! - **Docked layout**: each image where its thumbnail sits on screen
//! - **Paged layout**: one viewport-sized page per image, left to right,
//!   image at full page width and vertically centered
//! - **Morphing**: frame interpolation between the two
//!
//! # Example
//!
//! ```rust
//! use lightbox_layout::{offset_for_page, PagedLayout};
//! use lightbox_core::{Rect, Size};
//!
//! let layout = PagedLayout::from_ratios([2.0, 1.0, 0.5], Size::new(300.0, 600.0));
//! assert_eq!(layout.page(1).page_frame, Rect::new(300.0, 0.0, 300.0, 600.0));
//! assert_eq!(layout.page(1).image_frame.height(), 300.0);
//! assert_eq!(offset_for_page(1, 300.0), 300.0);
//! ```

pub mod docked;
pub mod morph;
pub mod paged;
pub mod space;

pub use docked::docked_frames;
pub use morph::{LayoutMorph, MorphTrack};
pub use paged::{
    offset_for_page, page_for_offset, paged_layout, total_content_size, PageSlot, PagedLayout,
};
pub use space::CoordinateSpace;
