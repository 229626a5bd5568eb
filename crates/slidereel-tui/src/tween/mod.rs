//! Slide tweening for the terminal stage
//!
//! ## Atoms
//! - `easing` - Pure easing curves mapping [0, 1] to [0, 1]
//! - `timing` - Progress and interpolation helpers
//!
//! ## Molecule
//! - `animator` - Runs the per-slot tracks of one carousel transition and
//!   reports each finished track back to the carousel
//!
//! # Usage
//!
//! ```ignore
//! use slidereel_tui::tween::SlideAnimator;
//!
//! let mut animator = SlideAnimator::new(EasingType::Cubic);
//! animator.start(animation, Instant::now());
//!
//! // In main loop, advance each frame and read interpolated offsets
//! animator.update(Instant::now());
//! let frame = animator.frame();
//! ```

pub mod easing;
pub mod timing;

pub mod animator;

pub use animator::{SlideAnimator, TrackFrame};
pub use easing::{EasingType, EasingTypeExt};
