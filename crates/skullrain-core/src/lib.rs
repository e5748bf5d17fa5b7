//! Core types shared by the skullrain crates.

mod palette;
mod placement;

pub use palette::{ColorSelection, Palette};
pub use placement::PlacementRect;
