//! Emoji face re-rolled on every tick, next to the tick's timestamp.

use chrono::{DateTime, Local};
use drip_core::{ChoiceSampler, PeriodicDisplay};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::Stylize,
    text::Line,
    widgets::Paragraph,
};
use tracing::debug;

#[derive(Debug)]
pub struct EmojiFaces {
    display: PeriodicDisplay<ChoiceSampler<String>>,
    stamp: Option<DateTime<Local>>,
}

impl EmojiFaces {
    pub fn new(glyphs: Vec<String>, period_ms: u64) -> Self {
        Self {
            display: PeriodicDisplay::new(period_ms, ChoiceSampler::new(glyphs, String::new())),
            stamp: None,
        }
    }

    pub fn mount(&mut self, now_ms: u64) {
        self.display.mount(now_ms);
    }

    pub fn unmount(&mut self) {
        self.display.unmount();
        self.stamp = None;
    }

    /// Milliseconds until the next face is due.
    pub fn until_next_tick(&self, now_ms: u64) -> Option<u64> {
        self.display.ticker().until_next_tick(now_ms)
    }

    /// Draw a new face if a tick is due, stamping it with `wall_clock`.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        now_ms: u64,
        wall_clock: DateTime<Local>,
        rng: &mut R,
    ) {
        if let Some(sample) = self.display.update(now_ms, rng) {
            debug!(tick = sample.tick.index, emoji = %sample.value, "emoji tick");
            self.stamp = Some(wall_clock);
        }
    }

    /// The current face; empty before the first tick or with no glyphs.
    pub fn emoji(&self) -> &str {
        self.display
            .current()
            .map(|sample| sample.value.as_str())
            .unwrap_or("")
    }

    pub fn timestamp(&self) -> Option<String> {
        self.stamp
            .map(|stamp| stamp.format("%Y-%m-%d %H:%M:%S %z").to_string())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [stamp_area, emoji_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(8)]).areas(area);
        let [stamp_row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(stamp_area);
        let [emoji_row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(emoji_area);

        let stamp = self.timestamp().unwrap_or_default();
        frame.render_widget(Paragraph::new(stamp.dark_gray()), stamp_row.inner(Margin::new(1, 0)));
        frame.render_widget(Line::from(self.emoji().bold()).centered(), emoji_row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn faces() -> Vec<String> {
        ["😎", "😵", "🫠", "🤓", "🙂", "🥹"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_samples_on_each_tick() {
        let mut emoji = EmojiFaces::new(faces(), 700);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(emoji.emoji(), "");

        emoji.mount(0);
        emoji.update(0, Local::now(), &mut rng);
        assert!(faces().iter().any(|f| f == emoji.emoji()));
        assert!(emoji.timestamp().is_some());
        assert_eq!(emoji.until_next_tick(100), Some(600));
    }

    #[test]
    fn test_empty_glyphs_fall_back() {
        let mut emoji = EmojiFaces::new(Vec::new(), 700);
        let mut rng = StdRng::seed_from_u64(5);
        emoji.mount(0);
        emoji.update(0, Local::now(), &mut rng);
        assert_eq!(emoji.emoji(), "");
    }

    #[test]
    fn test_unmount_stops_updates() {
        let mut emoji = EmojiFaces::new(faces(), 700);
        let mut rng = StdRng::seed_from_u64(5);
        emoji.mount(0);
        emoji.update(0, Local::now(), &mut rng);
        emoji.unmount();
        emoji.update(1400, Local::now(), &mut rng);
        assert_eq!(emoji.emoji(), "");
        assert!(emoji.timestamp().is_none());
    }

    #[test]
    fn test_render_shows_timestamp() {
        let mut emoji = EmojiFaces::new(vec!["🙂".to_string()], 700);
        let mut rng = StdRng::seed_from_u64(5);
        emoji.mount(0);
        let wall = Local::now();
        emoji.update(0, wall, &mut rng);

        let mut terminal = Terminal::new(TestBackend::new(50, 3)).unwrap();
        terminal.draw(|frame| emoji.render(frame, frame.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..50).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(row.contains(&wall.format("%Y-%m-%d").to_string()));
        assert!(row.contains("🙂"));
    }
}
