//! Digital rain animation for skullrain.
//!
//! Streams fall down fixed columns and paint glyphs into a persistent
//! canvas, which is copied into every frame. Cells inside the keep-clear
//! rectangle reserved for the art are never painted.

mod chars;
mod state;
mod stream;

pub use chars::{GLYPH_WIDTH, RAIN_GLYPHS, random_glyph};
pub use state::RainState;
pub use stream::{RainConfig, Stream, StreamStep};
