//! Easing curves mapping linear progress (0.0 to 1.0) to eased progress.

use serde::{Deserialize, Serialize};

/// Timing curve applied to an animation's progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve to `t`, clamped to 0.0..=1.0 first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => linear(t),
            Easing::EaseIn => ease_in(t),
            Easing::EaseOut => ease_out(t),
            Easing::EaseInOut => ease_in_out(t),
        }
    }
}

/// Linear interpolation (no easing)
pub fn linear(t: f64) -> f64 {
    t
}

/// Ease in (quadratic) - slow start, accelerating
pub fn ease_in(t: f64) -> f64 {
    t * t
}

/// Ease out (quadratic) - fast start, decelerating
pub fn ease_out(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Ease in-out (quadratic) - slow start and end, fast middle
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}
