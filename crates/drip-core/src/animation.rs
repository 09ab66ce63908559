//! Explicit property animation driven by an external millisecond clock.
//!
//! An [`Animation`] describes *how* a value moves (duration, easing and
//! repeat policy); an [`Animated`] value remembers where it came from and
//! where it is going, and is sampled with the current time on every frame.

use crate::easing::Easing;
use crate::types::AnimationSpeed;

/// Values that can be blended between two end points.
pub trait Interpolate {
    /// Blend from `self` toward `other` by `t` (0.0 = self, 1.0 = other).
    fn interpolate(&self, other: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

/// Repeat policy of an animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Repeat {
    /// Run once and hold the target value.
    #[default]
    Once,
    /// Restart forever, optionally playing every other cycle backwards.
    Forever { autoreverse: bool },
}

/// Duration, easing and repeat policy of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub duration_ms: u64,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Default for Animation {
    /// Ease-in-out over 350ms, the default implicit animation.
    fn default() -> Self {
        Self::ease_in_out(350)
    }
}

impl Animation {
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            repeat: Repeat::Once,
        }
    }

    pub const fn linear(duration_ms: u64) -> Self {
        Self::new(duration_ms, Easing::Linear)
    }

    pub const fn ease_out(duration_ms: u64) -> Self {
        Self::new(duration_ms, Easing::EaseOut)
    }

    pub const fn ease_in_out(duration_ms: u64) -> Self {
        Self::new(duration_ms, Easing::EaseInOut)
    }

    /// Repeat this animation forever.
    pub const fn repeat_forever(mut self, autoreverse: bool) -> Self {
        self.repeat = Repeat::Forever { autoreverse };
        self
    }

    /// Stretch or shrink the duration according to `speed`.
    pub fn scaled(mut self, speed: AnimationSpeed) -> Self {
        self.duration_ms = speed.scale_ms(self.duration_ms);
        self
    }

    /// Whether a run-once animation has reached its end. Repeating
    /// animations never finish.
    pub fn is_finished(&self, elapsed_ms: u64) -> bool {
        match self.repeat {
            Repeat::Once => elapsed_ms >= self.duration_ms,
            Repeat::Forever { .. } => false,
        }
    }

    /// Eased progress in 0.0..=1.0 after `elapsed_ms`.
    pub fn progress(&self, elapsed_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let duration = self.duration_ms;
        let raw = match self.repeat {
            Repeat::Once => (elapsed_ms as f64 / duration as f64).min(1.0),
            Repeat::Forever { autoreverse } => {
                let cycle = elapsed_ms / duration;
                let frac = (elapsed_ms % duration) as f64 / duration as f64;
                // Odd cycles play backwards
                if autoreverse && cycle % 2 == 1 {
                    1.0 - frac
                } else {
                    frac
                }
            }
        };
        self.easing.apply(raw)
    }
}

/// A value whose changes are interpolated over time instead of snapping.
#[derive(Debug, Clone)]
pub struct Animated<T> {
    from: T,
    to: T,
    started_ms: u64,
    animation: Option<Animation>,
}

impl<T: Interpolate + Clone> Animated<T> {
    /// Create a value at rest.
    pub fn new(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
            started_ms: 0,
            animation: None,
        }
    }

    /// The presented value at `now_ms`.
    pub fn value(&self, now_ms: u64) -> T {
        let Some(animation) = self.animation else {
            return self.to.clone();
        };
        let elapsed = now_ms.saturating_sub(self.started_ms);
        if animation.is_finished(elapsed) {
            self.to.clone()
        } else {
            self.from.interpolate(&self.to, animation.progress(elapsed))
        }
    }

    /// The value the animation is heading for.
    pub fn target(&self) -> &T {
        &self.to
    }

    /// Start animating toward `target`, continuing from the value
    /// presented at `now_ms`.
    pub fn animate_to(&mut self, target: T, animation: Animation, now_ms: u64) {
        self.from = self.value(now_ms);
        self.to = target;
        self.started_ms = now_ms;
        self.animation = Some(animation);
    }

    /// Change the duration of the running animation, keeping its
    /// progress so the presented value does not jump.
    pub fn retime(&mut self, duration_ms: u64, now_ms: u64) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        let elapsed = now_ms.saturating_sub(self.started_ms);
        if animation.is_finished(elapsed) || animation.duration_ms == 0 {
            return;
        }
        let rescaled = u128::from(elapsed) * u128::from(duration_ms)
            / u128::from(animation.duration_ms);
        let rescaled = u64::try_from(rescaled).unwrap_or(u64::MAX);
        self.started_ms = now_ms.saturating_sub(rescaled);
        animation.duration_ms = duration_ms;
    }

    /// Jump to `value` without animating.
    pub fn set(&mut self, value: T) {
        self.from = value.clone();
        self.to = value;
        self.animation = None;
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.animation
            .is_some_and(|a| !a.is_finished(now_ms.saturating_sub(self.started_ms)))
    }
}
