//! Lightbox Animation
//!
//! The animation primitives the gallery transition needs.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Initial Velocity**: Springs can start moving, so gesture-driven motion stays continuous
//! - **Easing**: Standard curves plus CSS-style cubic beziers
//! - **Tweens**: Fixed-duration, eased progress from 0 to 1
//! - **Interpolation**: `Interpolate` for floats, points, sizes, rects, colors
//! - **FrameScheduler**: Single-threaded, frame-driven stepping with exactly-once completion reports

pub mod easing;
pub mod scheduler;
pub mod spring;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use scheduler::{FrameScheduler, Motion, MotionId};
pub use spring::{Spring, SpringConfig};
pub use tween::Tween;
pub use values::Interpolate;
