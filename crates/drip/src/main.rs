use std::io;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
};
use drip_config::Config;
use drip_core::{AnimationSpeed, ColorTheme, Rgb};
use drip_scenes::{EmojiFaces, MovingCircles, PictureView, WaterDropView};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType},
};
use tracing::{info, warn};

mod logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    let log_file = logging::init_tracing(&config.log).unwrap_or_else(|err| {
        eprintln!("drip: logging disabled: {err}");
        None
    });
    if let Some(err) = config_error {
        warn!(%err, "falling back to the default configuration");
    }
    info!(log_file = ?log_file, speed = config.speed.label(), "starting drip");

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
        warn!(%err, "failed to disable mouse capture");
    }
    ratatui::restore();
    result
}

/// Screen regions that react to mouse clicks, captured while rendering.
#[derive(Debug, Clone, Copy, Default)]
struct HitAreas {
    animate_button: Rect,
    picture: Rect,
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Clock origin for every animation.
    started: Instant,
    /// Longest wait between two frames.
    frame_interval: Duration,
    speed: AnimationSpeed,
    color_theme: ColorTheme,
    rng: StdRng,
    circles: MovingCircles,
    picture: PictureView,
    emoji: EmojiFaces,
    drop: WaterDropView,
    hit_areas: HitAreas,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            running: false,
            started: Instant::now(),
            frame_interval: Duration::from_millis(config.frame_interval_ms),
            speed: config.speed,
            color_theme: config.theme,
            rng,
            circles: MovingCircles::new(),
            picture: PictureView::new(),
            emoji: EmojiFaces::new(config.emoji.glyphs, config.emoji.period_ms),
            drop: WaterDropView::new(
                config.drop.min_height,
                config.drop.max_height,
                config.drop.period_ms,
            ),
            hit_areas: HitAreas::default(),
        }
    }

    /// Milliseconds since the app was created.
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        execute!(io::stdout(), EnableMouseCapture)?;
        self.mount();
        while self.running {
            self.update();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.unmount();
        Ok(())
    }

    /// Start the tickers and the endless gradient.
    fn mount(&mut self) {
        let now = self.now_ms();
        self.running = true;
        self.circles.on_appear(now, self.speed);
        self.emoji.mount(now);
        self.drop.mount(now);
        info!(now_ms = now, "scenes mounted");
    }

    fn unmount(&mut self) {
        self.emoji.unmount();
        self.drop.unmount();
        info!("scenes unmounted");
    }

    /// Advance the periodic displays to the current time.
    fn update(&mut self) {
        let now = self.now_ms();
        self.emoji.update(now, Local::now(), &mut self.rng);
        self.drop.update(now, &mut self.rng, self.speed);
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now = self.now_ms();
        let accent = self.color_theme.color();

        let [title, grid, help] = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Fill(1),   // Cards
            Constraint::Length(1), // Help text
        ])
        .areas(frame.area());
        let [top, bottom] =
            Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(grid);
        let [circles_card, picture_card] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);
        let [emoji_card, drop_card] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(bottom);

        frame.render_widget(Line::from("Let's animate!".bold().fg(accent)).centered(), title);

        let circles_area = render_card(frame, circles_card, " Moving circles ", accent);
        self.circles.render(frame, circles_area, now, accent);

        let picture_area = render_card(frame, picture_card, " Picture ", accent);
        self.picture.render(frame, picture_area, now);

        let emoji_area = render_card(frame, emoji_card, " Emoji faces ", accent);
        self.emoji.render(frame, emoji_area);

        let drop_area = render_card(frame, drop_card, " Water drop ", accent);
        self.drop.render(frame, drop_area, now);

        self.hit_areas = HitAreas {
            animate_button: MovingCircles::button_area(circles_area),
            picture: picture_area,
        };

        let help_line = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "a".bold().fg(accent),
            " animate  ".dark_gray(),
            "p".bold().fg(accent),
            " tap picture  ".dark_gray(),
            "s".bold().fg(accent),
            format!(" speed ({})  ", self.speed.label()).dark_gray(),
            "c".bold().fg(accent),
            " cycle color".dark_gray(),
        ])
        .centered();
        frame.render_widget(help_line, help);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the frame interval or the next tick.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.poll_timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    fn poll_timeout(&self) -> Duration {
        let now = self.now_ms();
        [
            self.emoji.until_next_tick(now),
            self.drop.until_next_tick(now),
        ]
        .into_iter()
        .flatten()
        .map(Duration::from_millis)
        .fold(self.frame_interval, Duration::min)
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('a')) => self.press_animate(),
            (_, KeyCode::Char('p') | KeyCode::Char(' ')) => self.tap_picture(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            _ => {}
        }
    }

    /// Left clicks act as taps on the button and the picture.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        if self.hit_areas.animate_button.contains(position) {
            self.press_animate();
        } else if self.hit_areas.picture.contains(position) {
            self.tap_picture();
        }
    }

    fn press_animate(&mut self) {
        let now = self.now_ms();
        self.circles.toggle(now, self.speed);
    }

    fn tap_picture(&mut self) {
        let now = self.now_ms();
        self.picture.tap(now, self.speed);
    }

    /// Cycle the animation speed and re-time every running animation.
    fn cycle_speed(&mut self) {
        let now = self.now_ms();
        self.speed = self.speed.next();
        self.circles.set_speed(now, self.speed);
        self.picture.set_speed(now, self.speed);
        self.drop.set_speed(now, self.speed);
        info!(speed = self.speed.label(), "animation speed changed");
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Draw a rounded card and return the area inside its border.
fn render_card(frame: &mut Frame, area: Rect, title: &'static str, accent: Color) -> Rect {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(title.bold().fg(accent))
        .style(Style::new().bg(Rgb::CARD.into()));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
