//! Text layout and rendering utilities

use crate::document::Color;
use crate::font::FontMetrics;
use crate::format_number as n;
use crate::Align;

/// Smallest font size shrink-to-fit will go down to
pub const MIN_FONT_SIZE: f64 = 5.0;

/// Amount the font size is reduced per shrink-to-fit attempt
pub const SHRINK_STEP: f64 = 0.5;

/// Tolerance for floating point width/height comparisons
const EPSILON: f64 = 1e-6;

/// Context for rendering text
pub struct TextRenderContext {
    /// PDF font resource name (e.g., "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f64,
    /// Text width in points (for alignment)
    pub text_width: f64,
    /// Text color (RGB)
    pub color: Color,
}

/// Generate PDF operators for text insertion
///
/// Creates the PDF text operators (BT, Tf, Td, Tj, ET) to render text
/// with its alignment anchor at `x`.
///
/// # Arguments
/// * `text_hex` - Hex-encoded text (e.g., "<48656C6C6F>")
/// * `x` - X coordinate of the alignment anchor in points
/// * `y` - Baseline Y coordinate in points (PDF coordinates, from bottom)
/// * `align` - Text alignment relative to the anchor
/// * `ctx` - Text rendering context
pub fn generate_text_operators(
    text_hex: &str,
    x: f64,
    y: f64,
    align: Align,
    ctx: &TextRenderContext,
) -> Vec<u8> {
    let mut ops = String::new();

    let x_offset = match align {
        Align::Left | Align::Justify => 0.0,
        Align::Center => -ctx.text_width / 2.0,
        Align::Right => -ctx.text_width,
    };

    ops.push_str("BT\n");
    ops.push_str(&format!(
        "{} {} {} rg\n",
        n(ctx.color.r as f64),
        n(ctx.color.g as f64),
        n(ctx.color.b as f64)
    ));
    ops.push_str(&format!("/{} {} Tf\n", ctx.font_name, n(ctx.font_size)));
    ops.push_str(&format!("{} {} Td\n", n(x + x_offset), n(y)));
    ops.push_str(&format!("{text_hex} Tj\n"));
    ops.push_str("ET\n");

    ops.into_bytes()
}

/// One laid-out line of a text box
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Line text, words joined by single spaces
    pub text: String,
    /// Words on the line
    pub words: Vec<String>,
    /// Rendered width in points
    pub width: f64,
    /// Whether this line ends a paragraph (never justified)
    pub last_in_paragraph: bool,
}

/// Result of fitting text into a box
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    /// Font size the text fits at
    pub font_size: f64,
    /// Distance between baselines in points
    pub line_height: f64,
    /// Distance from the box top to the first baseline in points
    pub ascent: f64,
    /// Lines to draw, top to bottom
    pub lines: Vec<TextLine>,
    /// Set when text did not fit even at [`MIN_FONT_SIZE`] and lines were dropped
    pub truncated: bool,
}

/// Wrap text into lines no wider than `max_width`, breaking only between words
///
/// Newlines start a new paragraph. A single word wider than `max_width`
/// is kept whole on its own line.
pub fn wrap_words(
    text: &str,
    max_width: f64,
    font_size: f64,
    metrics: &dyn FontMetrics,
) -> Vec<TextLine> {
    let space = metrics.text_width_points(" ", font_size);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut words: Vec<String> = Vec::new();
        let mut width = 0.0;

        for word in paragraph.split_whitespace() {
            let word_width = metrics.text_width_points(word, font_size);
            if words.is_empty() {
                words.push(word.to_string());
                width = word_width;
            } else if width + space + word_width <= max_width + EPSILON {
                words.push(word.to_string());
                width += space + word_width;
            } else {
                lines.push(TextLine {
                    text: words.join(" "),
                    words: std::mem::take(&mut words),
                    width,
                    last_in_paragraph: false,
                });
                words.push(word.to_string());
                width = word_width;
            }
        }

        lines.push(TextLine {
            text: words.join(" "),
            words,
            width,
            last_in_paragraph: true,
        });
    }

    lines
}

/// Largest size on the shrink grid that could still fit, capped at `font_size`
///
/// One line must fit the height and the widest word must fit the width,
/// so nothing above those bounds is tried. Never goes below
/// [`MIN_FONT_SIZE`] unless `font_size` already does.
fn start_size(
    text: &str,
    width: f64,
    height: f64,
    font_size: f64,
    metrics: &dyn FontMetrics,
) -> f64 {
    let unit_line = metrics.line_height(1.0);
    let height_cap = if unit_line > 0.0 {
        height / unit_line
    } else {
        f64::INFINITY
    };

    let widest_word = text
        .split_whitespace()
        .map(|word| metrics.text_width_points(word, 1.0))
        .fold(0.0, f64::max);
    let width_cap = if widest_word > 0.0 {
        width / widest_word
    } else {
        f64::INFINITY
    };

    let cap = height_cap.min(width_cap);
    let cap = if cap.is_finite() {
        ((cap / SHRINK_STEP).floor() * SHRINK_STEP).max(MIN_FONT_SIZE)
    } else {
        cap
    };

    // f64::min ignores NaN, so a NaN font size starts at the cap
    let size = font_size.min(cap);
    if size.is_finite() {
        size
    } else {
        MIN_FONT_SIZE
    }
}

/// Fit text into a `width` x `height` box, shrinking the font as needed
///
/// Starts at `font_size`, or the largest size that could fit if smaller, and
/// steps down by [`SHRINK_STEP`] until the wrapped text fits both dimensions
/// or [`MIN_FONT_SIZE`] is reached. At the floor, lines that do not fit
/// vertically are dropped and `truncated` is set.
pub fn layout_text_box(
    text: &str,
    width: f64,
    height: f64,
    font_size: f64,
    metrics: &dyn FontMetrics,
) -> TextLayout {
    let mut size = start_size(text, width, height, font_size, metrics);
    loop {
        let lines = wrap_words(text, width, size, metrics);
        let line_height = metrics.line_height(size);
        let fits_width = lines.iter().all(|l| l.width <= width + EPSILON);
        let fits_height = lines.len() as f64 * line_height <= height + EPSILON;

        if fits_width && fits_height {
            return TextLayout {
                font_size: size,
                line_height,
                ascent: metrics.ascender() * size / 1000.0,
                lines,
                truncated: false,
            };
        }

        // The second check stops sizes where a 0.5pt step is below float precision.
        if size - SHRINK_STEP < MIN_FONT_SIZE || size - SHRINK_STEP >= size {
            let max_lines = if line_height > 0.0 {
                ((height + EPSILON) / line_height).floor().max(0.0) as usize
            } else {
                lines.len()
            };
            let mut lines = lines;
            lines.truncate(max_lines);
            return TextLayout {
                font_size: size,
                line_height,
                ascent: metrics.ascender() * size / 1000.0,
                lines,
                truncated: true,
            };
        }

        size -= SHRINK_STEP;
    }
}
