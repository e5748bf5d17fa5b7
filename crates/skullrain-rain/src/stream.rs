//! Falling glyph streams (stateful).

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::trace;

/// Tunables for the stream model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainConfig {
    /// Columns between neighbouring streams.
    pub spacing: u16,
    /// Ticks per visible step. Lower is faster.
    pub speed: RangeInclusive<u32>,
    /// Trail length in rows.
    pub length: RangeInclusive<u16>,
    /// Respawned streams restart up to this many rows above the screen.
    pub respawn_depth: u16,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            spacing: 2,
            speed: 1..=3,
            length: 8..=17,
            respawn_depth: 20,
        }
    }
}

impl RainConfig {
    /// Number of streams that fit in a screen `width` columns wide.
    pub fn stream_count(&self, width: u16) -> usize {
        usize::from(width / self.spacing.max(1))
    }

    /// Screen column of the stream at `index`.
    pub fn column(&self, index: usize) -> u16 {
        (index as u16).saturating_mul(self.spacing.max(1))
    }
}

/// Rows touched by one visible step of a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStep {
    /// Tail row to clear.
    pub erase: Option<u16>,
    /// Head row to paint.
    pub draw: Option<u16>,
}

/// State for a single falling stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    /// Row of the head. Negative while above the screen.
    pub y: i32,
    /// Ticks between visible steps.
    pub speed: u32,
    /// Length of the trail.
    pub length: u16,
    /// Ticks seen so far.
    pub counter: u32,
}

impl Stream {
    /// Create a stream somewhere on a screen `height` rows tall.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &RainConfig, height: u16) -> Self {
        Self {
            y: rng.gen_range(0..i32::from(height.max(1))),
            speed: rng.gen_range(config.speed.clone()).max(1),
            length: random_length(rng, config),
            counter: 0,
        }
    }

    /// Row just past the end of the trail.
    pub fn tail(&self) -> i32 {
        self.y - i32::from(self.length)
    }

    /// Advance one tick.
    ///
    /// Returns the rows to erase and paint when this tick is a visible step,
    /// `None` otherwise. Once the tail leaves the bottom of the screen the
    /// stream restarts above the top with a new length.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &RainConfig,
        height: u16,
    ) -> Option<StreamStep> {
        self.counter = self.counter.wrapping_add(1);
        if self.counter % self.speed.max(1) != 0 {
            return None;
        }

        let step = StreamStep {
            erase: visible_row(self.tail(), height),
            draw: visible_row(self.y, height),
        };

        self.y += 1;
        if self.tail() > i32::from(height) {
            self.respawn(rng, config);
        }
        Some(step)
    }

    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &RainConfig) {
        self.y = -rng.gen_range(0..i32::from(config.respawn_depth.max(1)));
        self.length = random_length(rng, config);
        trace!(y = self.y, length = self.length, "stream respawned");
    }
}

fn random_length<R: Rng + ?Sized>(rng: &mut R, config: &RainConfig) -> u16 {
    rng.gen_range(config.length.clone()).max(1)
}

fn visible_row(y: i32, height: u16) -> Option<u16> {
    u16::try_from(y).ok().filter(|&row| row < height)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn stream(y: i32, speed: u32, length: u16) -> Stream {
        Stream {
            y,
            speed,
            length,
            counter: 0,
        }
    }

    #[test]
    fn test_spawn_within_bounds() {
        let config = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let s = Stream::spawn(&mut rng, &config, 24);
            assert!((0..24).contains(&s.y));
            assert!(config.speed.contains(&s.speed));
            assert!(config.length.contains(&s.length));
            assert_eq!(s.counter, 0);
        }
    }

    #[test]
    fn test_spawn_on_zero_height_screen() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = Stream::spawn(&mut rng, &RainConfig::default(), 0);
        assert_eq!(s.y, 0);
    }

    #[test]
    fn test_advance_waits_for_speed() {
        let config = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut s = stream(5, 3, 2);

        assert_eq!(s.advance(&mut rng, &config, 20), None);
        assert_eq!(s.advance(&mut rng, &config, 20), None);
        assert!(s.advance(&mut rng, &config, 20).is_some());
        assert_eq!(s.y, 6);
        assert_eq!(s.counter, 3);
    }

    #[test]
    fn test_speed_one_steps_every_tick() {
        let config = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut s = stream(0, 1, 8);
        for _ in 0..5 {
            assert!(s.advance(&mut rng, &config, 20).is_some());
        }
        assert_eq!(s.y, 5);
    }

    #[test]
    fn test_step_erases_tail_and_draws_head() {
        let config = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut s = stream(10, 1, 4);

        let step = s.advance(&mut rng, &config, 20).unwrap();
        assert_eq!(
            step,
            StreamStep {
                erase: Some(6),
                draw: Some(10)
            }
        );
        assert_eq!(s.y, 11);
    }

    #[test]
    fn test_offscreen_rows_are_skipped() {
        let config = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(5);

        let mut above = stream(-3, 1, 8);
        assert_eq!(
            above.advance(&mut rng, &config, 20),
            Some(StreamStep::default())
        );

        let mut below = stream(25, 1, 8);
        let step = below.advance(&mut rng, &config, 20).unwrap();
        assert_eq!(step.erase, Some(17));
        assert_eq!(step.draw, None);
    }

    #[test]
    fn test_no_respawn_while_tail_on_last_row() {
        let config = RainConfig::default();
        let mut rng = StdRng::seed_from_u64(6);
        let mut s = stream(27, 1, 8);

        s.advance(&mut rng, &config, 20);
        assert_eq!(s.y, 28);
        assert_eq!(s.tail(), 20);
    }

    #[test]
    fn test_respawn_after_tail_leaves_screen() {
        let config = RainConfig::default();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut s = stream(28, 2, 8);
            s.counter = 1;

            let step = s.advance(&mut rng, &config, 20).unwrap();
            assert_eq!(step, StreamStep::default());
            assert!((-19..=0).contains(&s.y), "y = {}", s.y);
            assert!(config.length.contains(&s.length));
            assert_eq!(s.speed, 2);
        }
    }

    #[test]
    fn test_stream_count_and_columns() {
        let config = RainConfig::default();
        assert_eq!(config.stream_count(80), 40);
        assert_eq!(config.stream_count(81), 40);
        assert_eq!(config.stream_count(1), 0);
        assert_eq!(config.column(0), 0);
        assert_eq!(config.column(39), 78);
    }
}
