//! Three translucent circles pulsing over the animated gradient.

use drip_core::{Animated, Animation, AnimationSpeed, Repeat, Rgb};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    text::Line,
    widgets::Paragraph,
};
use tracing::info;

use crate::gradient::GradientBackground;
use crate::pixels::{Viewport, half_block_lines};

/// Side of the square the circles are laid out in, in points.
const FRAME: f64 = 210.0;
const REST_SCALE: f64 = 0.2;
const FULL_SCALE: f64 = 1.0;

struct Circle {
    diameter: f64,
    color: Rgb,
    opacity: f64,
    animation: Animation,
}

/// Back to front.
const CIRCLES: [Circle; 3] = [
    Circle {
        diameter: 210.0,
        color: Rgb::WHITE,
        opacity: 0.2,
        animation: Animation::ease_out(2000).repeat_forever(true),
    },
    Circle {
        diameter: 170.0,
        color: Rgb::WHITE,
        opacity: 0.5,
        animation: Animation::ease_out(1500).repeat_forever(true),
    },
    Circle {
        diameter: 120.0,
        color: Rgb::RED,
        opacity: 0.5,
        animation: Animation::linear(900),
    },
];

/// Moving circles card: a gradient, three circles and an "Animate!"
/// button toggling their scale between 0.2 and 1.0.
#[derive(Debug, Clone)]
pub struct MovingCircles {
    background: GradientBackground,
    scales: [Animated<f64>; 3],
    animate: bool,
}

impl Default for MovingCircles {
    fn default() -> Self {
        Self::new()
    }
}

impl MovingCircles {
    pub fn new() -> Self {
        Self {
            background: GradientBackground::new(),
            scales: std::array::from_fn(|_| Animated::new(REST_SCALE)),
            animate: false,
        }
    }

    pub fn on_appear(&mut self, now_ms: u64, speed: AnimationSpeed) {
        self.background.on_appear(now_ms, speed);
    }

    /// Whether the circles are currently heading for full size.
    pub fn is_animating(&self) -> bool {
        self.animate
    }

    /// Press the "Animate!" button. Pulsing only happens on the way
    /// out; returning to rest always runs once and settles at 0.2.
    pub fn toggle(&mut self, now_ms: u64, speed: AnimationSpeed) {
        self.animate = !self.animate;
        let target = if self.animate { FULL_SCALE } else { REST_SCALE };
        for (scale, circle) in self.scales.iter_mut().zip(&CIRCLES) {
            let mut animation = circle.animation.scaled(speed);
            if !self.animate {
                animation.repeat = Repeat::Once;
            }
            scale.animate_to(target, animation, now_ms);
        }
        info!(animate = self.animate, target, "circles toggled");
    }

    /// Re-time the running gradient sweep and circle animations.
    pub fn set_speed(&mut self, now_ms: u64, speed: AnimationSpeed) {
        self.background.set_speed(now_ms, speed);
        for (scale, circle) in self.scales.iter_mut().zip(&CIRCLES) {
            scale.retime(circle.animation.scaled(speed).duration_ms, now_ms);
        }
    }

    /// Presented scale of each circle, back to front.
    pub fn scales(&self, now_ms: u64) -> [f64; 3] {
        std::array::from_fn(|i| self.scales[i].value(now_ms))
    }

    /// Row holding the button inside the card's inner `area`.
    pub fn button_area(area: Rect) -> Rect {
        let [_, button] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        button
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, now_ms: u64, accent: Color) {
        let [stage, button] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let gradient = self.background.gradient_at(now_ms);
        let scales = self.scales(now_ms);
        let pixels_w = stage.width;
        let pixels_h = stage.height * 2;
        let viewport = Viewport::fit(pixels_w, pixels_h, FRAME, FRAME);
        let centre = FRAME / 2.0;

        let lines = half_block_lines(stage.width, stage.height, |px, py| {
            let mut color = gradient.color_at(
                f64::from(px) + 0.5,
                f64::from(py) + 0.5,
                f64::from(pixels_w),
                f64::from(pixels_h),
            );
            let p = viewport.to_logical(px, py);
            let dist = ((p.x - centre).powi(2) + (p.y - centre).powi(2)).sqrt();
            for (circle, scale) in CIRCLES.iter().zip(scales) {
                if dist <= circle.diameter * scale / 2.0 {
                    color = circle.color.over(color, circle.opacity);
                }
            }
            color
        });
        frame.render_widget(Paragraph::new(lines), stage);

        let label = if self.animate {
            "[ Animate! ]".bold().fg(Color::White).bg(accent)
        } else {
            "[ Animate! ]".bold().fg(accent)
        };
        frame.render_widget(Line::from(label).centered(), button);
    }
}
