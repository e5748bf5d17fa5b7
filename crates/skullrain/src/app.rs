//! Animation driver and frame composition.

use std::{thread, time::Duration};

use crossterm::event::{self, Event, KeyEventKind};
use rand::{Rng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::Size,
    style::Style,
    text::Line,
    widgets::Paragraph,
};
use skullrain_art::ArtBuffer;
use skullrain_core::{ColorSelection, PlacementRect};
use skullrain_rain::{RainConfig, RainState};

/// Pause between frames, roughly 15 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_micros(66_666);

/// The main application which holds the state and logic of the animation.
#[derive(Debug)]
pub struct App<R = StdRng> {
    /// Is the application running?
    running: bool,
    /// Art drawn over the rain.
    art: ArtBuffer,
    /// Where the art goes; fixed for the whole run.
    placement: PlacementRect,
    /// Rain and art colors.
    colors: ColorSelection,
    /// Falling streams.
    rain: RainState<R>,
}

impl<R: Rng> App<R> {
    /// Construct a new instance of [`App`] for a screen of the given size.
    pub fn new(art: ArtBuffer, colors: ColorSelection, size: Size, rng: R) -> Self {
        let placement = PlacementRect::centered(size, art.width(), art.height());
        let rain = RainState::new(
            size,
            placement,
            Style::new().fg(colors.rain.color()),
            RainConfig::default(),
            rng,
        );

        Self {
            running: false,
            art,
            placement,
            colors,
            rain,
        }
    }

    /// Run the animation until a key is pressed.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            thread::sleep(FRAME_INTERVAL);
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Advance the rain by one tick and draw the frame.
    fn render(&mut self, frame: &mut Frame) {
        self.rain.tick();

        let area = frame.area();
        frame.render_widget(&self.rain, area);
        self.render_art(frame);
    }

    /// Draw the art at its placement, on top of whatever is there.
    fn render_art(&self, frame: &mut Frame) {
        let Some((visible, scroll)) = self.placement.clip(frame.area()) else {
            return;
        };

        let style = Style::new().fg(self.colors.art.color());
        let lines: Vec<Line> = self
            .art
            .rows()
            .iter()
            .map(|row| Line::styled(row.as_str(), style))
            .collect();

        frame.render_widget(Paragraph::new(lines).scroll(scroll), visible);
    }

    /// Drain pending input without blocking.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        while event::poll(Duration::ZERO)? {
            if is_key_press(&event::read()?) {
                self.quit();
            }
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Any key press ends the animation; releases, mouse and resize do not.
fn is_key_press(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key.kind == KeyEventKind::Press)
}
