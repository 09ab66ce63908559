//! Animated sunset gradient used behind the moving circles.

use drip_core::{Animated, Animation, AnimationSpeed, LinearGradient, Rgb, UnitPoint};
use tracing::debug;

/// One full sweep of the gradient axis.
const SWEEP_MS: u64 = 4000;

/// Orange → red → purple gradient whose axis swings between the two
/// diagonals forever once the background appears.
#[derive(Debug, Clone)]
pub struct GradientBackground {
    colors: Vec<Rgb>,
    start: Animated<UnitPoint>,
    end: Animated<UnitPoint>,
    started: bool,
}

impl Default for GradientBackground {
    fn default() -> Self {
        Self::new()
    }
}

impl GradientBackground {
    pub fn new() -> Self {
        Self {
            colors: vec![Rgb::ORANGE, Rgb::RED, Rgb::PURPLE],
            start: Animated::new(UnitPoint::BOTTOM_LEADING),
            end: Animated::new(UnitPoint::TOP_TRAILING),
            started: false,
        }
    }

    /// Start the endless sweep. Later calls keep the running animation.
    pub fn on_appear(&mut self, now_ms: u64, speed: AnimationSpeed) {
        if self.started {
            return;
        }
        self.started = true;
        let sweep = Animation::linear(SWEEP_MS)
            .repeat_forever(true)
            .scaled(speed);
        self.start.animate_to(UnitPoint::TOP_LEADING, sweep, now_ms);
        self.end.animate_to(UnitPoint::BOTTOM_TRAILING, sweep, now_ms);
        debug!(duration_ms = sweep.duration_ms, "gradient sweep started");
    }

    /// Re-time a running sweep without jumping.
    pub fn set_speed(&mut self, now_ms: u64, speed: AnimationSpeed) {
        let duration_ms = speed.scale_ms(SWEEP_MS);
        self.start.retime(duration_ms, now_ms);
        self.end.retime(duration_ms, now_ms);
    }

    /// The gradient as presented at `now_ms`.
    pub fn gradient_at(&self, now_ms: u64) -> LinearGradient {
        LinearGradient::new(
            self.colors.clone(),
            self.start.value(now_ms),
            self.end.value(now_ms),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_until_appear() {
        let bg = GradientBackground::new();
        let g = bg.gradient_at(10_000);
        assert_eq!(g.start, UnitPoint::BOTTOM_LEADING);
        assert_eq!(g.end, UnitPoint::TOP_TRAILING);
    }

    #[test]
    fn test_sweep_autoreverses() {
        let mut bg = GradientBackground::new();
        bg.on_appear(0, AnimationSpeed::Medium);

        let half = bg.gradient_at(2000);
        assert_eq!(half.start, UnitPoint::new(0.0, 0.5));

        let full = bg.gradient_at(3999);
        assert!(full.start.y < 0.01);

        // Second cycle plays backwards
        let back = bg.gradient_at(6000);
        assert_eq!(back.start, UnitPoint::new(0.0, 0.5));
        let home = bg.gradient_at(8000);
        assert_eq!(home.start, UnitPoint::BOTTOM_LEADING);
    }

    #[test]
    fn test_appear_is_idempotent() {
        let mut bg = GradientBackground::new();
        bg.on_appear(0, AnimationSpeed::Medium);
        bg.on_appear(1000, AnimationSpeed::Medium);
        assert_eq!(bg.gradient_at(2000).start, UnitPoint::new(0.0, 0.5));
    }

    #[test]
    fn test_set_speed_shortens_sweep() {
        let mut bg = GradientBackground::new();
        bg.on_appear(0, AnimationSpeed::Medium);
        bg.set_speed(1000, AnimationSpeed::Fast);

        assert_eq!(bg.gradient_at(1000).start, UnitPoint::new(0.0, 0.75));
        // Two seconds per sweep from here on
        assert_eq!(bg.gradient_at(1500).start, UnitPoint::new(0.0, 0.5));
        assert_eq!(bg.gradient_at(3500).start, UnitPoint::new(0.0, 0.5));
    }
}
