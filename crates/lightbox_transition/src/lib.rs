//! Lightbox Transition Controller
//!
//! Expands a grid thumbnail into a full-screen paged gallery and collapses
//! it back, moving each image's rendered surface between the thumbnail and
//! the gallery so only one of them draws it at a time.
//!
//! - **Present**: images morph from their thumbnails into pages while the
//!   scrim and chrome fade in
//! - **Dismiss**: the image in view springs back into its thumbnail, wherever
//!   that thumbnail is now, and the rest of the gallery fades away
//! - **Interactive dismissal**: the image follows a drag and the release
//!   either commits or springs back
//!
//! The host drives frames with [`TransitionController::tick`] and draws the
//! [`GalleryScene`] it exposes.
//!
//! # Example
//!
//! ```rust
//! use lightbox_core::{Rect, SelectableImage, Size};
//! use lightbox_transition::{TransitionConfig, TransitionController, TransitionState};
//!
//! struct Thumb(Rect, Option<&'static str>);
//!
//! impl SelectableImage for Thumb {
//!     type Surface = &'static str;
//!     fn intrinsic_size(&self) -> Option<Size> { Some(Size::new(640.0, 480.0)) }
//!     fn current_screen_rect(&self) -> Rect { self.0 }
//!     fn detach_image_surface(&mut self) -> Option<&'static str> { self.1.take() }
//!     fn attach_image_surface(&mut self, surface: &'static str) { self.1 = Some(surface) }
//! }
//!
//! let mut controller = TransitionController::new(
//!     TransitionConfig::default(),
//!     Rect::new(0.0, 0.0, 320.0, 640.0),
//! );
//! controller.prepare(vec![Thumb(Rect::new(10.0, 100.0, 80.0, 80.0), Some("cat"))], 0);
//! controller.begin_presentation();
//! controller.animator_for_presentation().run(&mut controller, |_| {});
//!
//! while controller.tick(1.0 / 60.0) {}
//! assert_eq!(controller.state(), TransitionState::Presented);
//! ```

pub mod animator;
pub mod config;
pub mod controller;
pub mod dismissal;
pub mod gesture;
pub mod scene;
pub mod session;
pub mod state;

pub use animator::{TransitionAnimator, TransitionOutcome};
pub use config::{ConfigError, DismissConfig, TransitionConfig};
pub use controller::TransitionController;
pub use dismissal::{initial_spring_velocity, InteractiveDismissal};
pub use gesture::{GestureSample, VelocityTracker};
pub use scene::{GalleryScene, ImageLayer};
pub use session::GallerySession;
pub use state::{transition_events, TransitionDirection, TransitionState};
