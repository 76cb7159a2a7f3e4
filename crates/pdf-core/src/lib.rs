//! PDF Core - Low-level PDF page construction
//!
//! This crate provides functionality for:
//! - Creating single-page documents of a fixed size
//! - Standard PDF fonts and embedded TrueType fonts
//! - Shrink-to-fit text boxes with alignment
//! - Filled and stroked rectangles (barcode modules, outlines)
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{Align, PdfDocument, Rect};
//!
//! let mut doc = PdfDocument::new(288.0, 144.0);
//! doc.set_font("Helvetica", 10.0)?;
//! doc.insert_text_box("Hello", Rect::new(0.0, 0.0, 100.0, 50.0), Align::Left)?;
//! doc.save("output.pdf")?;
//! ```

mod document;
mod font;
mod graphics;
mod text;

pub use document::{Color, PdfDocument};
pub use font::{FontData, FontMetrics, LoadedFont, StandardFont};
pub use graphics::{generate_fill_operators, generate_stroke_operators, Rect};
pub use text::{
    generate_text_operators, layout_text_box, wrap_words, TextLayout, TextLine,
    TextRenderContext, MIN_FONT_SIZE, SHRINK_STEP,
};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("PDF parsing error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    /// Stretch word gaps so every line but the last of a paragraph fills the box width
    Justify,
}

/// Format a number for a content stream: at most three decimals, no trailing zeros
pub(crate) fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{rounded:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_default() {
        assert_eq!(Align::default(), Align::Left);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(11.338582), "11.339");
        assert_eq!(format_number(-12.5), "-12.5");
    }
}
