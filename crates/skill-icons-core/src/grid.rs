//! Grid composition of icons into a single SVG document.
//!
//! Every icon occupies a fixed `CELL`×`CELL` logical square. Icon artwork is
//! inset inside its cell, so the trailing `MARGIN` is trimmed from the total
//! span. The whole document is then scaled so that one icon renders at
//! `TARGET_SIZE` units.

use std::fmt::Write as FmtWrite;

use crate::catalogue::Catalogue;
use crate::logging::targets;

/// Logical size of one grid cell.
pub const CELL: u32 = 300;
/// Trimmed from the right and bottom edge of the grid.
pub const MARGIN: u32 = 44;
/// Rendered size of a single icon.
pub const TARGET_SIZE: u32 = 48;
/// Uniform downscale from logical to rendered units.
pub const SCALE: f64 = TARGET_SIZE as f64 / (CELL - MARGIN) as f64;

/// Document returned when there is nothing to draw.
pub const EMPTY_SVG: &str = r#"<svg width="48" height="48" viewBox="0 0 48 48" fill="none" xmlns="http://www.w3.org/2000/svg"></svg>"#;

/// Geometry of a composed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of icons laid out.
    pub count: usize,
    /// Icons per row.
    pub per_line: usize,
    /// Columns actually used (`min(per_line, count)`).
    pub columns: usize,
    /// Rows used (`ceil(count / per_line)`).
    pub rows: usize,
}

impl GridLayout {
    /// Compute the layout for `count` icons. A `per_line` of zero is treated
    /// as one.
    pub fn new(count: usize, per_line: usize) -> Self {
        let per_line = per_line.max(1);
        Self {
            count,
            per_line,
            columns: per_line.min(count),
            rows: count.div_ceil(per_line),
        }
    }

    /// Check if there is nothing to lay out.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Logical (viewBox) width.
    pub fn width(&self) -> u64 {
        span(self.columns)
    }

    /// Logical (viewBox) height.
    pub fn height(&self) -> u64 {
        span(self.rows)
    }

    /// Rendered width.
    pub fn scaled_width(&self) -> f64 {
        self.width() as f64 * SCALE
    }

    /// Rendered height.
    pub fn scaled_height(&self) -> f64 {
        self.height() as f64 * SCALE
    }

    /// Top-left offset of the cell at `index`.
    pub fn offset(&self, index: usize) -> (u64, u64) {
        let col = (index % self.per_line) as u64;
        let row = (index / self.per_line) as u64;
        (col * CELL as u64, row * CELL as u64)
    }
}

fn span(cells: usize) -> u64 {
    (cells as u64 * CELL as u64).saturating_sub(MARGIN as u64)
}

/// Compose catalogue entries into a grid SVG.
///
/// Keys missing from the catalogue are removed before layout, so the
/// remaining icons are packed without gaps.
pub fn compose<S: AsRef<str>>(catalogue: &Catalogue, keys: &[S], per_line: usize) -> String {
    let icons: Vec<&str> = keys
        .iter()
        .filter_map(|key| {
            let key = key.as_ref();
            let markup = catalogue.get(key);
            if markup.is_none() {
                tracing::debug!(target: targets::GRID, key, "Skipping unknown icon key");
            }
            markup
        })
        .collect();

    let layout = GridLayout::new(icons.len(), per_line);
    if layout.is_empty() {
        return EMPTY_SVG.to_string();
    }

    let body_len: usize = icons.iter().map(|m| m.len() + 64).sum();
    let mut svg = String::with_capacity(body_len + 256);

    write!(
        svg,
        r#"<svg width="{}" height="{}" viewBox="0 0 {} {}" fill="none" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" version="1.1">"#,
        layout.scaled_width(),
        layout.scaled_height(),
        layout.width(),
        layout.height(),
    )
    .expect("write to String");
    for (index, markup) in icons.iter().enumerate() {
        let (x, y) = layout.offset(index);
        write!(svg, r#"<g transform="translate({x}, {y})">{markup}</g>"#)
            .expect("write to String");
    }
    svg.push_str("</svg>");
    svg
}
