//! ASCII art loading for the skullrain centerpiece.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use unicode_width::UnicodeWidthChar;

/// Asset read at startup, relative to the working directory.
pub const DEFAULT_ART_PATH: &str = "assets/skull.txt";

/// Maximum number of rows kept from an art file.
pub const MAX_ROWS: usize = 200;

/// Maximum display width of a single row, in terminal columns.
pub const MAX_ROW_WIDTH: usize = 200;

/// Column interval between tab stops.
pub const TAB_STOP: usize = 8;

/// Art loading errors.
#[derive(Error, Debug)]
pub enum ArtError {
    #[error("failed to open art asset {}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Static art loaded from a text asset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtBuffer {
    rows: Vec<String>,
    width: u16,
}

impl ArtBuffer {
    /// Read the art at `path`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; the only failure is
    /// an unreadable file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ArtError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let art = Self::parse(&String::from_utf8_lossy(&bytes));
        debug!(
            path = %path.display(),
            width = art.width(),
            height = art.height(),
            "loaded art"
        );
        Ok(art)
    }

    /// Build art from text, one row per line.
    ///
    /// Line terminators are stripped, including the `\r` of a CRLF pair so
    /// that no raw carriage return reaches a terminal cell. Trailing
    /// whitespace is kept and tabs are expanded to [`TAB_STOP`] columns.
    /// Rows past [`MAX_ROWS`] and columns past [`MAX_ROW_WIDTH`] are dropped
    /// with a warning.
    pub fn parse(text: &str) -> Self {
        let mut rows = Vec::new();
        let mut dropped_rows = 0usize;
        let mut clipped_rows = 0usize;

        for line in text.lines() {
            if rows.len() == MAX_ROWS {
                dropped_rows += 1;
                continue;
            }
            let (row, clipped) = clip_row(&expand_tabs(line), MAX_ROW_WIDTH);
            if clipped {
                clipped_rows += 1;
            }
            rows.push(row);
        }

        if dropped_rows > 0 || clipped_rows > 0 {
            warn!(
                dropped_rows,
                clipped_rows,
                max_rows = MAX_ROWS,
                max_width = MAX_ROW_WIDTH,
                "art exceeds size bounds and was truncated"
            );
        }

        let width = rows.iter().map(|row| display_width(row)).max().unwrap_or(0);
        Self {
            rows,
            // Bounded by MAX_ROW_WIDTH.
            width: width as u16,
        }
    }

    /// Rows of the art, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Widest row, in terminal columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u16 {
        // Bounded by MAX_ROWS.
        self.rows.len() as u16
    }
}

fn display_width(row: &str) -> usize {
    row.chars().map(|ch| ch.width().unwrap_or(0)).sum()
}

/// Replace each tab with spaces up to the next tab stop.
fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }

    let mut expanded = String::with_capacity(line.len() + TAB_STOP);
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_STOP - column % TAB_STOP;
            expanded.push_str(&" ".repeat(pad));
            column += pad;
        } else {
            expanded.push(ch);
            column += ch.width().unwrap_or(0);
        }
    }
    expanded
}

/// Cut `line` to at most `max_width` columns, never splitting a wide char.
fn clip_row(line: &str, max_width: usize) -> (String, bool) {
    let mut width = 0;
    for (idx, ch) in line.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            return (line[..idx].to_string(), true);
        }
    }
    (line.to_string(), false)
}
