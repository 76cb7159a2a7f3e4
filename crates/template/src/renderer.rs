//! Label rendering

use crate::content::Content;
use crate::schema::{LabelBox, Origin, Template};
use crate::symbols::{code128_rects, qr_rects};
use crate::{Result, TemplateError};
use pdf_core::{PdfDocument, Rect};
use std::path::Path;

/// Line width used for bounds outlines
const BOUNDS_LINE_WIDTH: f64 = 1.0;

/// Font size the document starts with before any box sets its own
const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Label renderer
pub struct LabelRenderer<'a> {
    /// The template to render
    template: &'a Template,
}

impl<'a> LabelRenderer<'a> {
    /// Create a new renderer for a template
    pub fn new(template: &'a Template) -> Self {
        Self { template }
    }

    /// Render `data` into the template's boxes and save to `path`
    ///
    /// `data` must hold one entry per box. Nothing is written on error.
    pub fn render<S: AsRef<str>>(&self, data: &[S], path: impl AsRef<Path>) -> Result<()> {
        let mut doc = self.render_document(data)?;
        doc.save(path.as_ref())?;
        log::debug!("Rendered label to {}", path.as_ref().display());
        Ok(())
    }

    /// Render `data` into the template's boxes and return the PDF bytes
    pub fn render_to_bytes<S: AsRef<str>>(&self, data: &[S]) -> Result<Vec<u8>> {
        let mut doc = self.render_document(data)?;
        Ok(doc.to_bytes()?)
    }

    /// Outline the page and every box, without content, and save to `path`
    pub fn render_bounds(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut doc = self.bounds_document();
        doc.save(path.as_ref())?;
        log::debug!("Rendered bounds to {}", path.as_ref().display());
        Ok(())
    }

    /// Outline the page and every box and return the PDF bytes
    pub fn render_bounds_to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = self.bounds_document();
        Ok(doc.to_bytes()?)
    }

    fn render_document<S: AsRef<str>>(&self, data: &[S]) -> Result<PdfDocument> {
        let boxes = &self.template.boxes;
        if data.len() != boxes.len() {
            return Err(TemplateError::Arity {
                expected: boxes.len(),
                given: data.len(),
            });
        }

        let mut doc = PdfDocument::new(self.template.size.width, self.template.size.height);
        doc.set_font(&self.template.font, DEFAULT_FONT_SIZE)?;

        for (index, (label_box, entry)) in boxes.iter().zip(data).enumerate() {
            let content = Content::parse(entry.as_ref());
            log::debug!("Rendering box {index} as {}", content.kind());
            self.render_box(&mut doc, index, label_box, content)?;
        }

        Ok(doc)
    }

    /// Render a single box
    fn render_box(
        &self,
        doc: &mut PdfDocument,
        index: usize,
        label_box: &LabelBox,
        content: Content<'_>,
    ) -> Result<()> {
        let area = self.box_rect(label_box);

        match content {
            Content::Text(text) => {
                doc.set_font_size(label_box.font_size as f64)?;
                let layout = doc.insert_text_box(text, area, label_box.align.into())?;
                if layout.truncated {
                    log::warn!(
                        "Text on box number {index} does not fit at {}pt and was truncated to {} line(s)",
                        layout.font_size,
                        layout.lines.len()
                    );
                }
            }
            Content::Code128(value) => {
                let rects = code128_rects(value, area)?;
                doc.fill_rects(&rects);
            }
            Content::Qr(value) => {
                let rects = qr_rects(value, area)?;
                if rects.is_empty() {
                    log::warn!("Box number {index} is too small for a QR code");
                }
                doc.fill_rects(&rects);
            }
            Content::Base64(_) => {
                log::warn!("Box number {index} holds base64 content, which is not rendered");
            }
        }

        Ok(())
    }

    fn bounds_document(&self) -> PdfDocument {
        let (width, height) = (self.template.size.width, self.template.size.height);
        let mut doc = PdfDocument::new(width, height);

        doc.stroke_rect(Rect::new(0.0, 0.0, width, height), BOUNDS_LINE_WIDTH);
        for label_box in &self.template.boxes {
            doc.stroke_rect(self.box_rect(label_box), BOUNDS_LINE_WIDTH);
        }

        doc
    }

    /// Box area in top-left page coordinates
    fn box_rect(&self, label_box: &LabelBox) -> Rect {
        let y = match self.template.origin {
            Origin::TopLeft => label_box.position.y,
            Origin::BottomLeft => self.template.size.height - label_box.position.y,
        };
        Rect::new(
            label_box.position.x,
            y,
            label_box.size.width,
            label_box.size.height,
        )
    }
}

/// Render `data` into `template` and save to `path`
pub fn render<S: AsRef<str>>(template: &Template, data: &[S], path: impl AsRef<Path>) -> Result<()> {
    LabelRenderer::new(template).render(data, path)
}

/// Outline the page and every box of `template` and save to `path`
pub fn render_bounds(template: &Template, path: impl AsRef<Path>) -> Result<()> {
    LabelRenderer::new(template).render_bounds(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Align, LabelBox};

    fn template() -> Template {
        Template::new("Helvetica", 288.0, 144.0)
            .with_box(LabelBox::new(0.0, 0.0, 100.0, 50.0).font_size(10))
    }

    #[test]
    fn test_arity_mismatch() {
        let template = template();
        let renderer = LabelRenderer::new(&template);
        let result = renderer.render_to_bytes(&["a", "b"]);
        match result {
            Err(TemplateError::Arity { expected, given }) => {
                assert_eq!(expected, 1);
                assert_eq!(given, 2);
            }
            other => panic!("Expected arity error, got {other:?}"),
        }
    }

    #[test]
    fn test_arity_message() {
        let err = TemplateError::Arity {
            expected: 3,
            given: 2,
        };
        assert_eq!(
            err.to_string(),
            "Data input should have the same length as available boxes. Expecting 3 but 2 given"
        );
    }

    #[test]
    fn test_box_rect_top_left() {
        let template = Template::new("Helvetica", 288.0, 144.0)
            .with_box(LabelBox::new(10.0, 20.0, 100.0, 50.0));
        let renderer = LabelRenderer::new(&template);
        assert_eq!(
            renderer.box_rect(&template.boxes[0]),
            Rect::new(10.0, 20.0, 100.0, 50.0)
        );
    }

    #[test]
    fn test_box_rect_bottom_left() {
        let template = Template::new("Helvetica", 288.0, 144.0)
            .with_origin(Origin::BottomLeft)
            .with_box(LabelBox::new(10.0, 144.0, 100.0, 50.0));
        let renderer = LabelRenderer::new(&template);
        // y = 144 from the bottom is the page top
        assert_eq!(
            renderer.box_rect(&template.boxes[0]),
            Rect::new(10.0, 0.0, 100.0, 50.0)
        );
    }

    #[test]
    fn test_unknown_font_fails_before_rendering() {
        let template = Template::new("Comic Sans", 100.0, 100.0)
            .with_box(LabelBox::new(0.0, 0.0, 10.0, 10.0));
        let result = LabelRenderer::new(&template).render_to_bytes(&["x"]);
        assert!(matches!(result, Err(TemplateError::PdfError(_))));
    }

    #[test]
    fn test_invalid_code128_is_an_error() {
        let template = template();
        let result = LabelRenderer::new(&template).render_to_bytes(&["code128:"]);
        assert!(matches!(result, Err(TemplateError::Barcode(_))));
    }

    #[test]
    fn test_base64_renders_nothing() {
        let template = template();
        let bytes = LabelRenderer::new(&template)
            .render_to_bytes(&["base64:iVBORw0KGgo="])
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_bounds_ignore_fonts() {
        let template = Template::new("Comic Sans", 100.0, 100.0)
            .with_box(LabelBox::new(0.0, 0.0, 10.0, 10.0).align(Align::Center));
        let bytes = LabelRenderer::new(&template).render_bounds_to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
