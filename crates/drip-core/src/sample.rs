//! Independent random samples drawn once per tick.

use rand::Rng;
use rand::seq::IndexedRandom;

/// A source of one value per draw. Draws never fail: an empty source
/// yields its fallback value.
pub trait Sampler {
    type Output;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output;
}

/// Uniform choice from a fixed list.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceSampler<T> {
    choices: Vec<T>,
    fallback: T,
}

impl<T: Clone> ChoiceSampler<T> {
    pub fn new(choices: Vec<T>, fallback: T) -> Self {
        Self { choices, fallback }
    }

    pub fn choices(&self) -> &[T] {
        &self.choices
    }
}

impl<T: Clone> Sampler for ChoiceSampler<T> {
    type Output = T;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.choices
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Uniform integer in a closed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSampler {
    min: i64,
    max: i64,
}

impl RangeSampler {
    /// Bounds given in the wrong order are swapped.
    pub fn new(a: i64, b: i64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Sampler for RangeSampler {
    type Output = i64;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.min..=self.max)
    }
}
