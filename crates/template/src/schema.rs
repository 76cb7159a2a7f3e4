//! Label template schema types

use serde::{Deserialize, Serialize};

/// Root template structure: one physical label page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    /// Standard PDF font name or path to a TrueType file
    pub font: String,

    /// Page size in points
    pub size: Size,

    /// Content regions, matched positionally against the data list
    pub boxes: Vec<LabelBox>,

    /// How box positions are measured
    #[serde(default)]
    pub origin: Origin,
}

impl Template {
    /// Create an empty template of the given page size
    pub fn new(font: &str, width: f64, height: f64) -> Self {
        Self {
            font: font.to_string(),
            size: Size { width, height },
            boxes: Vec::new(),
            origin: Origin::default(),
        }
    }

    /// Append a box
    pub fn with_box(mut self, label_box: LabelBox) -> Self {
        self.boxes.push(label_box);
        self
    }

    /// Set how box positions are measured
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// A positioned, sized content region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelBox {
    /// Top-left corner of the box
    pub position: Position,

    /// Box size in points
    pub size: Size,

    /// Text alignment inside the box
    pub align: Align,

    /// Starting font size for shrink-to-fit text
    pub font_size: i64,
}

impl LabelBox {
    /// Create a left-aligned box with a 12pt starting font size
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Position { x, y },
            size: Size { width, height },
            align: Align::Left,
            font_size: 12,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn font_size(mut self, font_size: i64) -> Self {
        self.font_size = font_size;
        self
    }
}

/// Position in points, written as `[x, y]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

/// Size in points, written as `[width, height]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl From<[f64; 2]> for Size {
    fn from([width, height]: [f64; 2]) -> Self {
        Self { width, height }
    }
}

impl From<Size> for [f64; 2] {
    fn from(s: Size) -> Self {
        [s.width, s.height]
    }
}

/// Text alignment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    /// Accepted spellings, as written in template JSON
    pub const NAMES: [&'static str; 4] = ["left", "center", "right", "justify"];
}

impl From<Align> for pdf_core::Align {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => pdf_core::Align::Left,
            Align::Center => pdf_core::Align::Center,
            Align::Right => pdf_core::Align::Right,
            Align::Justify => pdf_core::Align::Justify,
        }
    }
}

/// Where box `y` coordinates are measured from
///
/// Defaults to `top-left`. Templates written for layouts that measure `y`
/// upward from the page bottom, such as PDF user space or Prawn's `:at`,
/// render upside down unless they set `"origin": "bottom-left"`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// `y` is the distance from the page top down to the box top
    #[default]
    TopLeft,
    /// `y` is the distance from the page bottom up to the box top
    BottomLeft,
}

impl Origin {
    /// Accepted spellings, as written in template JSON
    pub const NAMES: [&'static str; 2] = ["top-left", "bottom-left"];
}
