//! Rain animation state management.

use rand::{Rng, rngs::StdRng};
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::Style,
    widgets::Widget,
};
use skullrain_core::PlacementRect;
use tracing::debug;

use crate::chars::{GLYPH_WIDTH, random_glyph};
use crate::stream::{RainConfig, Stream};

/// Rain animation state.
///
/// Glyphs are painted into a persistent canvas and stay there until the
/// tail of their stream erases them, so each frame only shows what changed
/// on top of what was already on screen.
#[derive(Debug)]
pub struct RainState<R = StdRng> {
    /// One stream per column slot.
    streams: Vec<Stream>,
    /// Cells painted so far.
    canvas: Buffer,
    /// Stream tunables.
    config: RainConfig,
    /// Region the rain never paints.
    keep_clear: PlacementRect,
    /// Style of every rain glyph.
    style: Style,
    /// Source of positions, lengths and glyphs.
    rng: R,
}

impl<R: Rng> RainState<R> {
    /// Create rain for a screen of the given size.
    pub fn new(
        size: Size,
        keep_clear: PlacementRect,
        style: Style,
        config: RainConfig,
        mut rng: R,
    ) -> Self {
        let streams: Vec<Stream> = (0..config.stream_count(size.width))
            .map(|_| Stream::spawn(&mut rng, &config, size.height))
            .collect();
        debug!(
            streams = streams.len(),
            width = size.width,
            height = size.height,
            "rain initialized"
        );

        Self {
            streams,
            canvas: Buffer::empty(Rect::new(0, 0, size.width, size.height)),
            config,
            keep_clear,
            style,
            rng,
        }
    }

    /// Advance every stream by one tick, updating the canvas.
    pub fn tick(&mut self) {
        let height = self.canvas.area.height;

        for (index, stream) in self.streams.iter_mut().enumerate() {
            let Some(step) = stream.advance(&mut self.rng, &self.config, height) else {
                continue;
            };
            let x = self.config.column(index);

            if let Some(row) = step.erase {
                self.canvas[(x, row)].reset();
            }
            if let Some(row) = step.draw {
                // Art wins: the rain simply does not draw over it.
                if self
                    .keep_clear
                    .overlaps_span(i32::from(x), GLYPH_WIDTH, i32::from(row))
                {
                    continue;
                }
                let glyph = random_glyph(&mut self.rng);
                self.canvas
                    .set_string(x, row, glyph.encode_utf8(&mut [0; 4]), self.style);
            }
        }
    }
}

impl<R> RainState<R> {
    /// Current stream states, in column order.
    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    /// Cells painted so far.
    pub fn canvas(&self) -> &Buffer {
        &self.canvas
    }
}

impl<R> Widget for &RainState<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(self.canvas.area).intersection(buf.area);
        for position in area.positions() {
            buf[position] = self.canvas[position].clone();
        }
    }
}
