//! Glyph set for the rain.

use rand::Rng;

/// Glyphs drawn by the rain streams.
pub const RAIN_GLYPHS: &[char] = &[
    '日', '本', '語', '力', '夢', '電', '光', '心', '流', '界', '神', '無', '空', '天', '黒', '白',
    '龍', '星',
];

/// Display width shared by every glyph in [`RAIN_GLYPHS`].
pub const GLYPH_WIDTH: u16 = 2;

/// Pick a glyph uniformly at random.
pub fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    RAIN_GLYPHS[rng.gen_range(0..RAIN_GLYPHS.len())]
}
