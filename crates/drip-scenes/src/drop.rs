//! Water drop whose height is resampled on every tick and eased between
//! samples.

use drip_core::{
    Animated, Animation, AnimationSpeed, DROP_FRAME_SIZE, LinearGradient, Path, PeriodicDisplay,
    RangeSampler, Rect as FrameRect, Rgb, Shape, UnitPoint, WaterDrop,
};
use rand::Rng;
use ratatui::{
    Frame,
    layout::Rect,
    symbols::Marker,
    widgets::canvas::{Canvas, Painter, Shape as CanvasShape},
};
use tracing::debug;

#[derive(Debug)]
pub struct WaterDropView {
    display: PeriodicDisplay<RangeSampler>,
    height: Animated<f64>,
    fill: LinearGradient,
}

impl WaterDropView {
    pub fn new(min_height: i64, max_height: i64, period_ms: u64) -> Self {
        let sampler = RangeSampler::new(min_height, max_height);
        Self {
            height: Animated::new(sampler.min() as f64),
            display: PeriodicDisplay::new(period_ms, sampler),
            fill: LinearGradient::new(
                vec![Rgb::WHITE, Rgb::BLUE],
                UnitPoint::TOP_LEADING,
                UnitPoint::BOTTOM,
            ),
        }
    }

    pub fn mount(&mut self, now_ms: u64) {
        self.display.mount(now_ms);
    }

    pub fn unmount(&mut self) {
        self.display.unmount();
    }

    pub fn until_next_tick(&self, now_ms: u64) -> Option<u64> {
        self.display.ticker().until_next_tick(now_ms)
    }

    /// Sample a new height if a tick is due. The first sample is shown
    /// as is; later ones are animated to.
    pub fn update<R: Rng + ?Sized>(&mut self, now_ms: u64, rng: &mut R, speed: AnimationSpeed) {
        let first = self.display.current().is_none();
        let Some(sample) = self.display.update(now_ms, rng) else {
            return;
        };
        let target = sample.value as f64;
        debug!(tick = sample.tick.index, height = sample.value, "drop tick");
        if first {
            self.height.set(target);
        } else {
            self.height
                .animate_to(target, Animation::default().scaled(speed), now_ms);
        }
    }

    /// Re-time an in-flight height change.
    pub fn set_speed(&mut self, now_ms: u64, speed: AnimationSpeed) {
        self.height
            .retime(Animation::default().scaled(speed).duration_ms, now_ms);
    }

    /// Presented height at `now_ms`.
    pub fn height(&self, now_ms: u64) -> f64 {
        self.height.value(now_ms)
    }

    /// The drop outline in its 150×150 frame at `now_ms`.
    pub fn path(&self, now_ms: u64) -> Path {
        WaterDrop::new(self.height(now_ms))
            .path(FrameRect::from_size(DROP_FRAME_SIZE, DROP_FRAME_SIZE))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, now_ms: u64) {
        // Half blocks give two square pixels per cell
        let side = area.width.min(area.height * 2);
        let canvas_area = Rect {
            x: area.x + (area.width - side) / 2,
            y: area.y + (area.height - side / 2) / 2,
            width: side,
            height: side / 2,
        };
        if canvas_area.is_empty() {
            return;
        }

        let path = self.path(now_ms);
        let fill = DropFill {
            path: &path,
            gradient: &self.fill,
            columns: f64::from(canvas_area.width),
            rows: f64::from(canvas_area.height) * 2.0,
        };
        let canvas = Canvas::default()
            .marker(Marker::HalfBlock)
            .background_color(Rgb::CARD.into())
            .x_bounds([0.0, DROP_FRAME_SIZE])
            .y_bounds([0.0, DROP_FRAME_SIZE])
            .paint(|ctx| ctx.draw(&fill));
        frame.render_widget(canvas, canvas_area);
    }
}

/// Scanline fill of a path with a gradient, one sample per canvas pixel.
/// `columns` × `rows` must match the half-block grid of the canvas area.
struct DropFill<'a> {
    path: &'a Path,
    gradient: &'a LinearGradient,
    columns: f64,
    rows: f64,
}

impl CanvasShape for DropFill<'_> {
    fn draw(&self, painter: &mut Painter) {
        let step_x = DROP_FRAME_SIZE / self.columns;
        let step_y = DROP_FRAME_SIZE / self.rows;

        // Grid row 0 is the top of the canvas, like layout y
        for row in 0..self.rows as usize {
            let y = (row as f64 + 0.5) * step_y;
            let spans = self.path.scanline(y);
            if spans.is_empty() {
                continue;
            }
            for col in 0..self.columns as usize {
                let x = (col as f64 + 0.5) * step_x;
                if spans.iter().any(|&(start, end)| x >= start && x <= end) {
                    let color = self
                        .gradient
                        .color_at(x, y, DROP_FRAME_SIZE, DROP_FRAME_SIZE);
                    painter.paint(col, row, color.into());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    #[test]
    fn test_first_sample_snaps_then_animates() {
        let mut drop = WaterDropView::new(100, 150, 500);
        let mut rng = StdRng::seed_from_u64(21);
        drop.mount(0);

        drop.update(0, &mut rng, AnimationSpeed::Medium);
        let first = drop.height(0);
        assert!((100.0..=150.0).contains(&first));

        drop.update(500, &mut rng, AnimationSpeed::Medium);
        let settled = drop.height(850);
        assert!((100.0..=150.0).contains(&settled));
        // Midway values lie between the two samples
        let mid = drop.height(675);
        assert!(mid >= first.min(settled) && mid <= first.max(settled));
    }

    #[test]
    fn test_late_first_tick_still_snaps() {
        let mut drop = WaterDropView::new(100, 150, 500);
        let mut rng = StdRng::seed_from_u64(5);
        drop.mount(0);

        drop.update(1700, &mut rng, AnimationSpeed::Medium);
        let sampled = drop.display.current().map(|s| s.value as f64);
        assert_eq!(Some(drop.height(1700)), sampled);
    }

    #[test]
    fn test_remount_snaps_again() {
        let mut drop = WaterDropView::new(100, 150, 500);
        let mut rng = StdRng::seed_from_u64(13);
        drop.mount(0);
        drop.update(0, &mut rng, AnimationSpeed::Medium);
        drop.unmount();

        drop.mount(10_000);
        drop.update(10_000, &mut rng, AnimationSpeed::Medium);
        let sampled = drop.display.current().map(|s| s.value as f64);
        assert_eq!(Some(drop.height(10_000)), sampled);
    }

    #[test]
    fn test_heights_stay_bounded_over_many_ticks() {
        let mut drop = WaterDropView::new(100, 150, 500);
        let mut rng = StdRng::seed_from_u64(8);
        drop.mount(0);
        for i in 0..1000 {
            let now = i * 500;
            drop.update(now, &mut rng, AnimationSpeed::Medium);
            for offset in [0, 100, 250, 499] {
                let h = drop.height(now + offset);
                assert!((100.0..=150.0).contains(&h), "{h} escaped the range");
            }
        }
    }

    #[test]
    fn test_path_closes_at_top_centre() {
        let drop = WaterDropView::new(130, 130, 500);
        let path = drop.path(0);
        assert!(path.is_closed());
        assert_eq!(path.end_point(), Some(drip_core::Point::new(75.0, 0.0)));
    }

    #[test]
    fn test_render_fills_drop_with_gradient() {
        let mut drop = WaterDropView::new(150, 150, 500);
        let mut rng = StdRng::seed_from_u64(1);
        drop.mount(0);
        drop.update(0, &mut rng, AnimationSpeed::Medium);

        let mut terminal = Terminal::new(TestBackend::new(30, 15)).unwrap();
        terminal
            .draw(|frame| drop.render(frame, frame.area(), 0))
            .unwrap();
        let buffer = terminal.backend().buffer();

        // Centre column just under the tip is inside the drop
        let cell = &buffer[(15, 2)];
        assert!(matches!(cell.fg, Color::Rgb(..)));
        assert_ne!(cell.fg, Color::from(Rgb::CARD));
        // Far corners lie outside the drop
        assert_eq!(buffer[(0, 14)].bg, Color::from(Rgb::CARD));
    }
}
