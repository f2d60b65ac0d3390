//! Lightbox Core
//!
//! Foundational types shared by the lightbox gallery crates:
//!
//! - **Geometry**: `Point`, `Size`, `Rect`, `Vec2` in logical points
//! - **Color**: RGBA color used for the scrim
//! - **Selectable Images**: the `SelectableImage` trait implemented by thumbnail handles
//! - **Surface Ownership**: a registry tracking which side owns each rendered image surface
//! - **Contract Violations**: caller errors that abort a transition request
//!
//! # Example
//!
//! ```rust
//! use lightbox_core::{image_ratio, Size};
//!
//! assert_eq!(image_ratio(Some(Size::new(200.0, 100.0))), 2.0);
//! assert_eq!(image_ratio(Some(Size::ZERO)), 1.0);
//! assert_eq!(image_ratio(None), 1.0);
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod image;
pub mod surface;

pub use color::Color;
pub use error::ContractViolation;
pub use geometry::{Point, Rect, Size, Vec2};
pub use image::{image_ratio, SelectableImage};
pub use surface::{SurfaceOwner, SurfaceRegistry};
