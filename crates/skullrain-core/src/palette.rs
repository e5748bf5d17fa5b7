//! Named color palette for the rain and the art.

use std::fmt;

use ratatui::style::Color;

/// One of the fixed palette slots selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Palette {
    #[default]
    Green,
    Red,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
}

impl Palette {
    /// Every palette slot, in the order they are listed in the usage text.
    pub const ALL: [Palette; 7] = [
        Palette::Green,
        Palette::Red,
        Palette::Blue,
        Palette::Yellow,
        Palette::Magenta,
        Palette::Cyan,
        Palette::White,
    ];

    /// Resolve a color name, ignoring case.
    ///
    /// Unknown names fall back to [`Palette::default`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|slot| slot.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Resolve an optional color name; `None` maps to the default slot.
    pub fn resolve(name: Option<&str>) -> Self {
        name.map(Self::from_name).unwrap_or_default()
    }

    /// Lowercase name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Palette::Green => "green",
            Palette::Red => "red",
            Palette::Blue => "blue",
            Palette::Yellow => "yellow",
            Palette::Magenta => "magenta",
            Palette::Cyan => "cyan",
            Palette::White => "white",
        }
    }

    /// Convert the slot to a Ratatui color.
    pub fn color(self) -> Color {
        match self {
            Palette::Green => Color::Green,
            Palette::Red => Color::Red,
            Palette::Blue => Color::Blue,
            Palette::Yellow => Color::Yellow,
            Palette::Magenta => Color::Magenta,
            Palette::Cyan => Color::Cyan,
            Palette::White => Color::White,
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors chosen for the rain and for the art overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorSelection {
    pub rain: Palette,
    pub art: Palette,
}

impl ColorSelection {
    /// Resolve both colors from their user-supplied names.
    pub fn from_names(rain: Option<&str>, art: Option<&str>) -> Self {
        Self {
            rain: Palette::resolve(rain),
            art: Palette::resolve(art),
        }
    }
}
