//! Vector graphics operators: filled and stroked rectangles

use crate::document::Color;
use crate::format_number as n;

/// An axis-aligned rectangle in points
///
/// Page-level APIs take rectangles with a top-left origin (y grows downward);
/// [`Rect::to_pdf`] flips them into PDF's bottom-left user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the far edge (bottom in top-origin space)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Convert a top-origin rectangle to PDF coordinates on a page of `page_height`
    pub fn to_pdf(&self, page_height: f64) -> Rect {
        Rect {
            x: self.x,
            y: page_height - self.y - self.height,
            width: self.width,
            height: self.height,
        }
    }

    /// `re` path operator for this rectangle
    pub(crate) fn path(&self) -> String {
        format!(
            "{} {} {} {} re\n",
            n(self.x),
            n(self.y),
            n(self.width),
            n(self.height)
        )
    }
}

/// Generate operators filling every rectangle with `color`
///
/// Rectangles must already be in PDF coordinates.
pub fn generate_fill_operators(rects: &[Rect], color: Color) -> Vec<u8> {
    if rects.is_empty() {
        return Vec::new();
    }

    let mut ops = String::from("q\n");
    ops.push_str(&format!(
        "{} {} {} rg\n",
        n(color.r as f64),
        n(color.g as f64),
        n(color.b as f64)
    ));
    for rect in rects {
        ops.push_str(&rect.path());
    }
    ops.push_str("f\nQ\n");
    ops.into_bytes()
}

/// Generate operators stroking the outline of `rect`
///
/// The rectangle must already be in PDF coordinates.
pub fn generate_stroke_operators(rect: &Rect, line_width: f64, color: Color) -> Vec<u8> {
    let mut ops = String::from("q\n");
    ops.push_str(&format!("{} w\n", n(line_width)));
    ops.push_str(&format!(
        "{} {} {} RG\n",
        n(color.r as f64),
        n(color.g as f64),
        n(color.b as f64)
    ));
    ops.push_str(&rect.path());
    ops.push_str("S\nQ\n");
    ops.into_bytes()
}
