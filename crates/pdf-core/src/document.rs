//! PDF Document wrapper

use crate::font::{FontMetrics, LoadedFont};
use crate::graphics::{generate_fill_operators, generate_stroke_operators, Rect};
use crate::text::{generate_text_operators, layout_text_box, TextLayout, TextRenderContext};
use crate::{Align, PdfError, Result};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

/// Producer string written into the document info dictionary
const PRODUCER: &str = concat!("labelpdf ", env!("CARGO_PKG_VERSION"));

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Red color
    pub fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// A font registered on the page with its resource name
struct RegisteredFont {
    font: LoadedFont,
    /// Resource name used in the content stream (e.g., "F1")
    resource_name: String,
    /// Whether any text was drawn with it
    used: bool,
}

/// Single-page PDF document under construction
///
/// Drawing calls buffer content operators; nothing is written until
/// [`PdfDocument::save`] or [`PdfDocument::to_bytes`].
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    /// The only page
    page_id: ObjectId,
    /// Page width in points
    width: f64,
    /// Page height in points
    height: f64,
    /// Registered fonts (font name -> font)
    fonts: HashMap<String, RegisteredFont>,
    /// Next font resource number
    next_font_resource: u32,
    /// Current font name
    current_font: Option<String>,
    /// Current font size
    current_font_size: f64,
    /// Color used for filled and stroked shapes
    current_draw_color: Color,
    /// Buffered content operators for the page
    content: Vec<u8>,
    /// Set once fonts and content have been written into `inner`
    finalized: bool,
}

impl PdfDocument {
    /// Create a document with one blank page of the given size (in points)
    ///
    /// # Example
    /// ```ignore
    /// let doc = PdfDocument::new(288.0, 144.0);
    /// assert_eq!(doc.page_size(), (288.0, 144.0));
    /// ```
    pub fn new(width: f64, height: f64) -> Self {
        let mut inner = Document::with_version("1.5");

        let pages_id = inner.new_object_id();
        let page_id = inner.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(width as f32),
                Object::Real(height as f32),
            ],
        });
        inner.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1,
            }),
        );
        let catalog_id = inner.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        inner.trailer.set("Root", catalog_id);

        Self {
            inner,
            page_id,
            width,
            height,
            fonts: HashMap::new(),
            next_font_resource: 1,
            current_font: None,
            current_font_size: 12.0,
            current_draw_color: Color::default(),
            content: Vec::new(),
            finalized: false,
        }
    }

    /// Page size as (width, height) in points
    pub fn page_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.inner.get_pages().len()
    }

    /// Set the current font and size
    ///
    /// `name` is either a standard PDF font name (e.g. "Helvetica") or the
    /// path of a TrueType file. Fonts are loaded once and reused.
    pub fn set_font(&mut self, name: &str, size: f64) -> Result<()> {
        if !self.fonts.contains_key(name) {
            let font = LoadedFont::resolve(name)?;
            let resource_name = format!("F{}", self.next_font_resource);
            self.next_font_resource += 1;
            log::debug!("Registered font '{name}' as /{resource_name}");
            self.fonts.insert(
                name.to_string(),
                RegisteredFont {
                    font,
                    resource_name,
                    used: false,
                },
            );
        }

        self.current_font = Some(name.to_string());
        self.current_font_size = size;
        Ok(())
    }

    /// Set only the font size (keeps current font)
    pub fn set_font_size(&mut self, size: f64) -> Result<()> {
        if self.current_font.is_none() {
            return Err(PdfError::FontNotFound("No font set".to_string()));
        }
        self.current_font_size = size;
        Ok(())
    }

    /// Set the color for filled and stroked shapes
    pub fn set_draw_color(&mut self, color: Color) {
        self.current_draw_color = color;
    }

    fn current_font(&self) -> Result<&RegisteredFont> {
        let name = self
            .current_font
            .as_ref()
            .ok_or_else(|| PdfError::FontNotFound("No font set".to_string()))?;
        self.fonts
            .get(name)
            .ok_or_else(|| PdfError::FontNotFound(name.clone()))
    }

    fn current_font_mut(&mut self) -> Result<&mut RegisteredFont> {
        let name = self
            .current_font
            .as_ref()
            .ok_or_else(|| PdfError::FontNotFound("No font set".to_string()))?;
        self.fonts
            .get_mut(name)
            .ok_or_else(|| PdfError::FontNotFound(name.clone()))
    }

    /// Width of `text` in points in the current font and size
    pub fn text_width(&self, text: &str) -> Result<f64> {
        let font = self.current_font()?;
        Ok(font
            .font
            .metrics()
            .text_width_points(text, self.current_font_size))
    }

    /// Insert a single line of text
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `x` - X coordinate of the alignment anchor in points
    /// * `y` - Baseline Y coordinate in points (from top)
    /// * `align` - Text alignment relative to `x`
    pub fn insert_text(&mut self, text: &str, x: f64, y: f64, align: Align) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        let size = self.current_font_size;
        let color = Color::black();
        let pdf_y = self.height - y;
        let font = self.current_font_mut()?;

        let ctx = TextRenderContext {
            font_name: font.resource_name.clone(),
            font_size: size,
            text_width: font.font.metrics().text_width_points(text, size),
            color,
        };
        let text_hex = font.font.encode_text_hex(text);
        font.used = true;

        let operators = generate_text_operators(&text_hex, x, pdf_y, align, &ctx);
        self.content.extend_from_slice(&operators);
        Ok(())
    }

    /// Insert text into a box, wrapping at word boundaries and shrinking to fit
    ///
    /// The current font size is the starting size. Drawing is clipped to
    /// `rect` (top-left origin). Returns the layout that was drawn.
    pub fn insert_text_box(&mut self, text: &str, rect: Rect, align: Align) -> Result<TextLayout> {
        let size = self.current_font_size;
        let color = Color::black();
        let page_height = self.height;
        let font = self.current_font_mut()?;

        let layout = layout_text_box(text, rect.width, rect.height, size, font.font.metrics());

        let mut ops = Vec::new();
        ops.extend_from_slice(b"q\n");
        ops.extend_from_slice(rect.to_pdf(page_height).path().as_bytes());
        ops.extend_from_slice(b"W n\n");

        for (i, line) in layout.lines.iter().enumerate() {
            if line.text.is_empty() {
                continue;
            }
            let baseline = rect.y + layout.ascent + i as f64 * layout.line_height;
            let pdf_y = page_height - baseline;
            let ctx = TextRenderContext {
                font_name: font.resource_name.clone(),
                font_size: layout.font_size,
                text_width: line.width,
                color,
            };

            if align == Align::Justify && !line.last_in_paragraph && line.words.len() > 1 {
                let widths: Vec<f64> = line
                    .words
                    .iter()
                    .map(|w| font.font.metrics().text_width_points(w, layout.font_size))
                    .collect();
                let gap = (rect.width - widths.iter().sum::<f64>()) / (widths.len() - 1) as f64;
                let mut x = rect.x;
                for (word, width) in line.words.iter().zip(widths) {
                    let text_hex = font.font.encode_text_hex(word);
                    ops.extend(generate_text_operators(&text_hex, x, pdf_y, Align::Left, &ctx));
                    x += width + gap;
                }
            } else {
                let anchor = match align {
                    Align::Left | Align::Justify => rect.x,
                    Align::Center => rect.x + rect.width / 2.0,
                    Align::Right => rect.right(),
                };
                let text_hex = font.font.encode_text_hex(&line.text);
                ops.extend(generate_text_operators(&text_hex, anchor, pdf_y, align, &ctx));
            }
            font.used = true;
        }

        ops.extend_from_slice(b"Q\n");
        self.content.extend_from_slice(&ops);
        Ok(layout)
    }

    /// Fill rectangles (top-left origin) with the draw color
    pub fn fill_rects(&mut self, rects: &[Rect]) {
        let pdf_rects: Vec<Rect> = rects.iter().map(|r| r.to_pdf(self.height)).collect();
        let operators = generate_fill_operators(&pdf_rects, self.current_draw_color);
        self.content.extend_from_slice(&operators);
    }

    /// Stroke the outline of a rectangle (top-left origin) with the draw color
    pub fn stroke_rect(&mut self, rect: Rect, line_width: f64) {
        let pdf_rect = rect.to_pdf(self.height);
        let operators = generate_stroke_operators(&pdf_rect, line_width, self.current_draw_color);
        self.content.extend_from_slice(&operators);
    }

    /// Save the document to a file, replacing any existing file
    ///
    /// # Arguments
    /// * `path` - Output file path
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.finalize()?;
        self.inner
            .save(path.as_ref())
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        log::debug!("Saved PDF to {}", path.as_ref().display());
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.finalize()?;
        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(buffer)
    }

    /// Write fonts, the page content stream and the info dictionary into `inner`
    fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Ok(());
        }

        let mut font_dict = Dictionary::new();
        for registered in self.fonts.values().filter(|f| f.used) {
            let font_id = registered.font.embed(&mut self.inner);
            font_dict.set(registered.resource_name.as_bytes(), font_id);
        }

        let content = std::mem::take(&mut self.content);
        let stream = Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            compress(&content)?,
        );
        let contents_id = self.inner.add_object(stream);

        let page = self
            .inner
            .get_object_mut(self.page_id)?
            .as_dict_mut()
            .map_err(|_| PdfError::ParseError("Page object is not a dictionary".to_string()))?;
        page.set("Contents", contents_id);
        page.set("Resources", dictionary! { "Font" => font_dict });

        let creation_date = chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string();
        let info_id = self.inner.add_object(dictionary! {
            "Producer" => Object::string_literal(PRODUCER),
            "CreationDate" => Object::string_literal(creation_date),
        });
        self.inner.trailer.set("Info", info_id);

        self.finalized = true;
        Ok(())
    }
}

/// Flate-compress a content stream
fn compress(content: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content)?;
    Ok(encoder.finish()?)
}
