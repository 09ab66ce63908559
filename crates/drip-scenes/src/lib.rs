//! Animated card scenes for the drip showcase.
//!
//! Each scene owns its own animation state and renders into a region of
//! a `ratatui` frame. Time is always passed in explicitly as
//! milliseconds since start-up, so every frame is a pure function of the
//! scene state and the clock.

mod circles;
mod drop;
mod emoji;
mod gradient;
mod picture;
mod pixels;

pub use circles::MovingCircles;
pub use drop::WaterDropView;
pub use emoji::EmojiFaces;
pub use gradient::GradientBackground;
pub use picture::PictureView;
