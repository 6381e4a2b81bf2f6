//! Auto-fit text layout: the largest font size at which text fills a box.
//!
//! The search is a binary search over font sizes coupled with a greedy
//! word wrap. At each candidate size every row is measured; when the text
//! is too wide but another row would still fit vertically, the trailing
//! word of the widest row moves down one row and the same size is measured
//! again. Otherwise the size interval is halved towards whichever side the
//! measurement points at.
//!
//! Rows only ever gain words from the rows above them, so a word supply
//! that is finite bounds the number of moves, and every other step halves
//! the interval. An iteration cap backs this up.

use log::{trace, warn};

use super::metrics::TextMetrics;
use crate::geometry::{Anchor, Rect};
use crate::surface::{Rgb, Surface};

/// Tuning for the auto-fit search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitConfig {
    /// Upper bound of the font-size search.
    pub max_font_size: u32,
    /// Font size reported for empty text, which skips the search.
    pub empty_font_size: u32,
    /// Hard cap on search iterations (measurements).
    pub max_iterations: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            max_font_size: 256,
            empty_font_size: 1,
            max_iterations: 4096,
        }
    }
}

/// What to fit and how to paint it.
#[derive(Debug, Clone, Copy)]
pub struct FitRequest<'a> {
    /// The text; explicit line breaks start new rows.
    pub text: &'a str,
    /// Font family passed through to the metrics.
    pub family: &'a str,
    /// Box width in pixels.
    pub width: u32,
    /// Box height in pixels.
    pub height: u32,
    /// Whether words may move to new rows.
    pub wrap: bool,
    /// Text color.
    pub fg: Rgb,
    /// Background color of the produced image.
    pub bg: Rgb,
    /// Alignment of each row inside its row slot.
    pub anchor: Anchor,
}

/// One rendered row of fitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittedRow {
    /// Words of the row joined by single spaces.
    pub text: String,
    /// Where the row was drawn inside the fitted image.
    pub rect: Rect,
}

/// The outcome of [`fit_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittedText {
    /// The chosen font size.
    pub font_size: u32,
    /// The final rows, top to bottom.
    pub rows: Vec<FittedRow>,
    /// The text rasterized into a box-sized image (empty for empty text).
    pub image: Surface,
}

impl FittedText {
    /// The result for empty text: no rows and a zero-size image.
    pub const fn empty(font_size: u32) -> Self {
        Self {
            font_size,
            rows: Vec::new(),
            image: Surface::empty(),
        }
    }

    /// Check if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Split text into rows of words.
///
/// `\n`, `\r\n` and a lone `\r` all end a row; a trailing break does not
/// start an extra empty row.
fn split_rows(text: &str) -> Vec<Vec<&str>> {
    text.lines()
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
        .map(|line| line.split_whitespace().collect())
        .collect()
}

/// Measurement of a whole row set at one size.
struct BlockSize {
    /// Width of the widest row.
    width: u32,
    /// Index of the first row with that width.
    widest: usize,
    /// First row height times row count.
    height: u32,
}

#[allow(clippy::cast_possible_truncation)]
fn measure_rows(metrics: &dyn TextMetrics, family: &str, size: u32, rows: &[Vec<&str>]) -> BlockSize {
    let mut block = BlockSize { width: 0, widest: 0, height: 0 };
    for (index, row) in rows.iter().enumerate() {
        let (width, height) = metrics.measure(&row.join(" "), family, size);
        if index == 0 {
            block.height = height * rows.len() as u32;
        }
        if width > block.width {
            block.width = width;
            block.widest = index;
        }
    }
    block
}

/// Move the trailing word of `rows[row]` to the start of the row below.
///
/// The first move out of a row creates a new row under it; later moves
/// prepend to that row. `wrapped` holds the indices of rows created this
/// way and is kept in step with the insertions.
fn move_last_word<'t>(rows: &mut Vec<Vec<&'t str>>, row: usize, wrapped: &mut Vec<usize>) {
    let Some(word) = rows[row].pop() else {
        return;
    };
    let below = row + 1;
    if wrapped.contains(&below) {
        rows[below].insert(0, word);
    } else {
        rows.insert(below, vec![word]);
        for index in wrapped.iter_mut().filter(|index| **index >= below) {
            *index += 1;
        }
        wrapped.push(below);
    }
}

/// Find the largest font size at which `request.text` fits its box and
/// rasterize the text at that size.
///
/// Empty text skips the search: the result carries
/// `config.empty_font_size` and a zero-size image.
#[allow(clippy::cast_possible_truncation)]
pub fn fit_text(metrics: &dyn TextMetrics, request: &FitRequest<'_>, config: &FitConfig) -> FittedText {
    let mut rows = split_rows(request.text);
    if rows.is_empty() {
        return FittedText::empty(config.empty_font_size);
    }

    let (width, height) = (request.width, request.height);
    let mut wrapped = Vec::new();
    let (mut lower, mut upper) = (0, config.max_font_size);
    let mut size = upper;
    let mut tight = None;
    let mut iterations = 0;

    while upper - lower > 1 {
        if iterations == config.max_iterations {
            warn!(
                "text fit stopped after {iterations} iterations at size {lower} ({} rows)",
                rows.len()
            );
            break;
        }
        iterations += 1;

        let block = measure_rows(metrics, request.family, size, &rows);
        let row_count = rows.len() as u32;
        trace!(
            "fit size={size} range=[{lower}, {upper}] block={}x{} rows={row_count}",
            block.width,
            block.height
        );

        if request.wrap
            && block.width > width
            && block.height + block.height / row_count <= height
            && rows[block.widest].len() > 1
        {
            move_last_word(&mut rows, block.widest, &mut wrapped);
        } else if block.width > width || block.height > height {
            upper = size;
            size = (lower + upper) / 2;
        } else if block.width < width && block.height < height {
            lower = size;
            size = (lower + upper) / 2;
        } else {
            tight = Some(size);
            break;
        }
    }

    let font_size = tight.unwrap_or(lower);
    trace!("fit {:?} -> size {font_size} in {} rows", request.text, rows.len());
    render_rows(metrics, request, font_size, &rows)
}

/// Paint each row into its equal-height slot, aligned by the anchor.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn render_rows(
    metrics: &dyn TextMetrics,
    request: &FitRequest<'_>,
    font_size: u32,
    rows: &[Vec<&str>],
) -> FittedText {
    let mut image = Surface::filled(request.width, request.height, request.bg);
    let row_height = request.height / rows.len() as u32;

    let rows = rows
        .iter()
        .enumerate()
        .map(|(index, words)| {
            let text = words.join(" ");
            let rendered = metrics.render(&text, request.family, font_size, request.fg, Some(request.bg));
            let slot = Rect::new(0, (row_height * index as u32) as i32, request.width, row_height);
            let rect = request.anchor.place(rendered.width(), rendered.height(), &slot);
            image.blit(&rendered, (rect.x, rect.y));
            FittedRow { text, rect }
        })
        .collect();

    FittedText {
        font_size,
        rows,
        image,
    }
}
