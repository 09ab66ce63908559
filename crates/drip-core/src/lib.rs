//! Core types for the drip animation showcase.
//!
//! Everything here is a pure computation over in-memory values: geometry
//! of the animatable water-drop shape, easing and interpolation driven by
//! an external millisecond clock, linear gradients, and the periodic
//! ticker that feeds randomly sampled values into a render.

pub mod animation;
pub mod color;
pub mod easing;
pub mod geometry;
pub mod gradient;
pub mod sample;
pub mod shape;
pub mod timeline;
mod types;

pub use animation::{Animated, Animation, Interpolate, Repeat};
pub use color::Rgb;
pub use easing::Easing;
pub use geometry::{Path, PathElement, Point, Rect};
pub use gradient::{LinearGradient, UnitPoint};
pub use sample::{ChoiceSampler, RangeSampler, Sampler};
pub use shape::{Animatable, DROP_FRAME_SIZE, Shape, WaterDrop};
pub use timeline::{PeriodicDisplay, Tick, TickSample, Ticker, TickerState};
pub use types::{AnimationSpeed, ColorTheme};
