//! Label templates - JSON template parsing, validation and rendering
//!
//! This crate provides:
//! - Template schema types (page size, font, positioned boxes)
//! - Key normalization and structural validation of template JSON
//! - Tagged box content (`text:`, `qr:`, `code128:`, `base64:`)
//! - Rendering to PDF, plus a bounds mode that only outlines boxes
//!
//! # Example
//!
//! ```ignore
//! use template::{parse_template, LabelRenderer};
//!
//! let template = parse_template(template_json)?;
//! LabelRenderer::new(&template).render(&["text:Hello", "qr:https://example.com"], "output.pdf")?;
//! ```

mod content;
pub mod normalize;
pub mod parser;
mod renderer;
mod schema;
pub mod symbols;
pub mod validate;

pub use content::Content;
pub use normalize::normalize_keys;
pub use parser::{parse_data, parse_template};
pub use renderer::{render, render_bounds, LabelRenderer};
pub use schema::*;
pub use validate::{validate_template, SchemaError, Violation};

use thiserror::Error;

/// Errors that can occur during template processing
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid template: {0}")]
    Schema(#[from] SchemaError),

    #[error("Data input should have the same length as available boxes. Expecting {expected} but {given} given")]
    Arity { expected: usize, given: usize },

    #[error("Barcode error: {0}")]
    Barcode(String),

    #[error("Failed to parse template: {0}")]
    ParseError(String),

    #[error("PDF error: {0}")]
    PdfError(#[from] pdf_core::PdfError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
